pub mod extinf;
pub mod m3u;
