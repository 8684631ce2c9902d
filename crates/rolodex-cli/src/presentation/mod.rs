//! # Presentation Layer
//!
//! This module implements the user interface logic for the CLI, using an
//! adaptation of the **MVVM (Model-View-ViewModel)** pattern with
//! component-based UI state management for the interactive TUI.
//!
//! ## Architecture & Data Flow
//!
//! ### For Console Output (JSON/Text):
//! The data flow is strictly unidirectional.
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ View ] --> Output
//!   (Controller)     (Converter)        (Data)         (Layout)
//! ```
//!
//! ### For the Interactive Browser:
//! The handler owns domain state and pushes snapshots; the renderer owns UI
//! state and pushes semantic signals back.
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] ==(channel)==> [ Renderer ]
//!  (DirectoryState)                                                   |
//!        ^                                                            v
//!        +=========(channel: RendererSignal)=========== [ Component ] <-- keys
//! ```
//!
//! ## Rules of Thumb
//!
//! * **ViewModels carry data, not layout.** A presenter never pads columns or
//!   picks colors; a view never filters or sorts.
//! * **UI state stays in components.** Scroll position and cursor location
//!   never appear in a ViewModel; they live in the renderer's components and
//!   are re-clamped against the data on every draw.
//! * **Domain actions go up, UI actions stay local.** Moving the cursor is
//!   the renderer's business; opening a profile or changing a filter is a
//!   `RendererSignal` for the handler.

pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

// Re-exports for convenience
pub use renderers::TuiRenderer;
pub use renderers::tui::{RendererSignal, TuiEvent};
