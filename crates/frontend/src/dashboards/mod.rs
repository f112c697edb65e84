pub mod d400_monitor;
