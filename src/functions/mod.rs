mod build_id_from_label;
mod decompress_chunk;
mod download_build;
mod download_chunk;
mod download_chunked_file;
mod download_file;
mod human_readable_bytesize;
mod is_already_downloaded;
mod parse_selection;

pub use build_id_from_label::build_id_from_label as build_id_from_label;
pub(crate) use decompress_chunk::decompress_chunk as decompress_chunk;
pub(crate) use download_build::download_build as download_build;
pub(crate) use download_chunk::download_chunk as download_chunk;
pub(crate) use download_chunked_file::download_chunked_file as download_chunked_file;
pub(crate) use download_file::download_file as download_file;
pub use human_readable_bytesize::human_readable_bytesize as human_readable_bytesize;
pub(crate) use is_already_downloaded::is_already_downloaded as is_already_downloaded;
pub use parse_selection::parse_selection as parse_selection;
