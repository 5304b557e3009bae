//! # TUI Components
//!
//! All UI components for the terminal interface. Every component is
//! stateless: it receives borrowed data as props, renders one frame and is
//! dropped.
//!
//! - `TitleBar`: top status bar (lecture id, status message)
//! - `QuestionCard`: progress, prompt, options, verdict
//! - `ResultsView`: completion report
//! - `Notice`: loading and empty-state screens
//!
//! Each component file contains its rendering logic and its tests.

pub mod notice;
pub mod question_card;
pub mod results;
mod title_bar;

pub use notice::Notice;
pub use question_card::QuestionCard;
pub use results::ResultsView;
pub use title_bar::TitleBar;
