// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::sync::Arc;

use crate::config::{Mode, ProviderContext};
use crate::report::{ErrorQueue, Reporter};

/// Builds a provider context for `mode` whose errors land in the returned queue.
pub fn capturing_context(mode: Mode) -> (Arc<ProviderContext>, Arc<ErrorQueue>) {
    let queue = Arc::new(ErrorQueue::new());
    let context = ProviderContext::new(mode, Reporter::new(queue.clone()));

    (Arc::new(context), queue)
}
