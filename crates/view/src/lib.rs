// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! FastUI page descriptions for Pokémon lookups
//!
//! # Module Structure
//!
//! - [`components`]: display node types and their JSON shape
//! - [`render`]: pure builders turning a lookup outcome into a page
//! - [`html`]: the HTML shell that boots the front end

pub mod components;
pub mod html;
pub mod render;

pub use components::{AnyEvent, Component};
pub use html::prebuilt_html;
pub use render::{APP_TITLE, render, render_not_found, render_pokemon};
