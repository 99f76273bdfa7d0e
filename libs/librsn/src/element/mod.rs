mod capabilities;
mod option;
mod rsn_information;
mod suites;

pub use capabilities::RsnCapabilities;
pub use option::{ElementOption, RSN_ELEMENT_ID};
pub use rsn_information::RsnInformation;
pub(crate) use rsn_information::SUITE_SELECTOR_LEN;
pub use suites::{suite_code, AkmSuite, CypherSuite, IEEE_OUI};
