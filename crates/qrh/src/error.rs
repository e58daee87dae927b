// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// QRH error
///
/// Hashing itself cannot fail; only the operations that hand back an owned
/// buffer can, when the allocator refuses the request.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QrhError {
    /// The allocator could not provide a buffer of the requested size
    #[error("allocation of {requested} bytes failed")]
    AllocationFailed {
        /// Requested buffer size in bytes
        requested: usize,
    },
}
