pub mod button_controls;
pub mod editor;
pub mod preview;
pub mod status_bar;
