//! Core gem files: Gemfile, gemspec, library entry point and identity

use super::{Base, Generator, RunContext};
use crate::configuration::Configuration;
use crate::error::ScaffoldError;
use std::path::PathBuf;

const SETUP_SCRIPT: &str = "%gem_name%/bin/setup.tt";

pub struct Gem<'a> {
    base: Base<'a>,
}

impl<'a> Gem<'a> {
    pub const TEMPLATES: &'static [&'static str] = &[
        SETUP_SCRIPT,
        "%gem_name%/Gemfile.tt",
        "%gem_name%/%gem_name%.gemspec.tt",
        "%gem_name%/lib/%gem_name%.rb.tt",
        "%gem_name%/lib/%gem_name%/identity.rb.tt",
    ];

    pub fn new(configuration: &'a Configuration) -> Self {
        Self {
            base: Base::new(configuration, Self::TEMPLATES),
        }
    }
}

impl Generator for Gem<'_> {
    fn name(&self) -> &'static str {
        "gem"
    }

    fn templates(&self) -> &'static [&'static str] {
        Self::TEMPLATES
    }

    fn base(&self) -> &Base<'_> {
        &self.base
    }

    fn run(&self, ctx: &mut RunContext<'_>) -> Result<Vec<PathBuf>, ScaffoldError> {
        let written = self.base.create_files(ctx)?;
        self.base.make_executable(ctx, SETUP_SCRIPT)?;
        Ok(written)
    }
}
