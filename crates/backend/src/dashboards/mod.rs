pub mod d100_command_center;
