// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

pub mod directory;
pub mod filter;
pub mod ids;
pub mod model;
pub mod state;

pub use directory::*;
pub use filter::*;
pub use ids::*;
pub use model::*;
pub use state::*;
