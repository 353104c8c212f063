//! Tournament progression: state, advancer, controllers, reporting

pub mod controller;
pub mod game_loop;
pub mod interactive_controller;
pub mod preview;
pub mod report;
pub mod scripted_controller;
pub mod state;

pub use controller::{DecisionProvider, MatchView};
pub use game_loop::{AdvanceOutcome, GameLoop, VerbosityLevel};
pub use interactive_controller::InteractiveController;
pub use report::StatusReport;
pub use scripted_controller::ScriptedController;
pub use state::TourneyState;
