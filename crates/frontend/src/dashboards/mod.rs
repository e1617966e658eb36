pub mod d100_command_center;

pub use d100_command_center::ui::CommandCenterDashboard;
