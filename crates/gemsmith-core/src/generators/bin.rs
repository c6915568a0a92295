//! Executable support: a Thor-based CLI and its launcher script

use super::{Base, Generator, RunContext};
use crate::configuration::Configuration;
use crate::error::ScaffoldError;
use std::path::PathBuf;

const EXECUTABLE: &str = "%gem_name%/bin/%gem_name%.tt";

pub struct Bin<'a> {
    base: Base<'a>,
}

impl<'a> Bin<'a> {
    pub const TEMPLATES: &'static [&'static str] =
        &[EXECUTABLE, "%gem_name%/lib/%gem_name%/cli.rb.tt"];

    pub fn new(configuration: &'a Configuration) -> Self {
        Self {
            base: Base::new(configuration, Self::TEMPLATES),
        }
    }
}

impl Generator for Bin<'_> {
    fn name(&self) -> &'static str {
        "bin"
    }

    fn templates(&self) -> &'static [&'static str] {
        Self::TEMPLATES
    }

    fn base(&self) -> &Base<'_> {
        &self.base
    }

    fn run(&self, ctx: &mut RunContext<'_>) -> Result<Vec<PathBuf>, ScaffoldError> {
        let written = self.base.create_files(ctx)?;
        self.base.make_executable(ctx, EXECUTABLE)?;
        Ok(written)
    }
}
