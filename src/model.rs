pub mod extinf;
pub mod playlist;
pub mod track;
