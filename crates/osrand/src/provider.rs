// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Registration adapter binding [`Session`] to a host's named RAND operations.

use std::sync::Arc;

use log::debug;

use crate::config::ProviderContext;
use crate::diagnostics;
use crate::params::{self, ParamValue};
use crate::report::Reporter;
use crate::session::Session;
use crate::traits::{RandOperations, Status};

/// Provider name.
pub const PROVIDER_NAME: &str = "OSRand";

/// Provider version.
pub const PROVIDER_VERSION: &str = "0.1";

/// Operation identifier used by a host to query algorithm tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperationId(pub u32);

impl OperationId {
    /// Random generation.
    pub const RAND: Self = Self(5);
}

/// One algorithm entry returned by [`Provider::query_operation`].
#[derive(Debug)]
pub struct Algorithm {
    /// Colon separated algorithm names.
    pub names: &'static str,
    /// Property definition string.
    pub properties: &'static str,
    /// Human readable description.
    pub description: &'static str,
    new_context: fn(Arc<ProviderContext>) -> Box<dyn RandOperations>,
}

impl Algorithm {
    /// Creates a context implementing the fixed operation set.
    pub fn new_context(&self, context: Arc<ProviderContext>) -> Box<dyn RandOperations> {
        (self.new_context)(context)
    }
}

fn new_rand_context(context: Arc<ProviderContext>) -> Box<dyn RandOperations> {
    Box::new(Session::new(context))
}

static RAND_ALGORITHMS: [Algorithm; 1] = [Algorithm {
    names: "OSRAND",
    properties: "provider=osrand",
    description: "OS backed random generator",
    new_context: new_rand_context,
}];

/// Provider-level gettable parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderParams {
    /// [`PROVIDER_NAME`].
    pub name: &'static str,
    /// [`PROVIDER_VERSION`].
    pub version: &'static str,
    /// Crate build version.
    pub build_info: &'static str,
    /// Whether the provider is usable.
    pub status: bool,
}

/// A loaded provider: the shared context plus its algorithm tables.
#[derive(Debug, Clone)]
pub struct Provider {
    context: Arc<ProviderContext>,
}

impl Provider {
    /// Loads the provider from host settings.
    ///
    /// Diagnostics are initialized from the environment on first load.
    pub fn load<'a, I>(settings: I, reporter: Reporter) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        diagnostics::init();

        let context = ProviderContext::from_settings(settings, reporter);
        debug!("Loaded {PROVIDER_NAME} provider in {} mode", context.mode());

        Self {
            context: Arc::new(context),
        }
    }

    /// Wraps an already built context.
    pub fn with_context(context: Arc<ProviderContext>) -> Self {
        Self { context }
    }

    /// Shared context handed to every session.
    pub fn context(&self) -> &Arc<ProviderContext> {
        &self.context
    }

    /// Algorithm table for `operation`, if this provider implements it.
    pub fn query_operation(&self, operation: OperationId) -> Option<&'static [Algorithm]> {
        (operation == OperationId::RAND).then_some(&RAND_ALGORITHMS[..])
    }

    /// Creates a session bound to this provider.
    pub fn new_session(&self) -> Session {
        Session::new(Arc::clone(&self.context))
    }

    /// Provider-level parameters.
    pub fn get_params(&self) -> ProviderParams {
        ProviderParams {
            name: PROVIDER_NAME,
            version: PROVIDER_VERSION,
            build_info: env!("CARGO_PKG_VERSION"),
            status: true,
        }
    }
}

impl RandOperations for Session {
    fn instantiate(
        &mut self,
        strength: u32,
        prediction_resistance: bool,
        personalization: &[u8],
    ) -> Status {
        Session::instantiate(self, strength, prediction_resistance, personalization).into()
    }

    fn uninstantiate(&mut self) -> Status {
        Session::uninstantiate(self).into()
    }

    fn generate(&mut self, out: &mut [u8], strength: u32, prediction_resistance: bool) -> Status {
        Session::generate(self, out, strength, prediction_resistance).into()
    }

    fn reseed(&mut self, prediction_resistance: bool, entropy: &[u8], additional: &[u8]) -> Status {
        Session::reseed(self, prediction_resistance, entropy, additional).into()
    }

    fn enable_locking(&mut self) -> Status {
        Session::enable_locking(self).into()
    }

    fn lock(&mut self) -> Status {
        Session::lock(self).into()
    }

    fn unlock(&mut self) {
        Session::unlock(self);
    }

    fn get_ctx_param(&self, name: &str) -> Option<ParamValue> {
        self.params().get(name)
    }

    fn gettable_ctx_params(&self) -> &'static [&'static str] {
        params::GETTABLE
    }

    fn settable_ctx_params(&self) -> &'static [&'static str] {
        params::SETTABLE
    }
}
