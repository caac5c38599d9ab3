// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line front end of termcal.

mod cli;
mod cmd_compile;
mod config;

pub use crate::cli::{Cli, run};
pub use crate::cmd_compile::{CmdCompile, Target};
pub use crate::config::Config;
