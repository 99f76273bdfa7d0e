#![no_main]
use libfuzzer_sys::fuzz_target;
use librsn::{ElementOption, RsnInformation};

fuzz_target!(|data: &[u8]| {
    let mut src = data;

    while let Ok((option, rem)) = ElementOption::parse(src) {
        let _ = RsnInformation::from_option(&option);
        src = rem;
    }
});
