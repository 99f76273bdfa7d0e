mod element;
mod rsn_information;

pub use element::parse_element;
pub use rsn_information::parse_rsn_information;
