#![no_main]
use libfuzzer_sys::fuzz_target;
use librsn::RsnInformation;

fuzz_target!(|data: &[u8]| {
    if let Ok(info) = RsnInformation::parse(data) {
        let bytes = info.serialize();
        assert_eq!(bytes.len(), info.serialized_len());
        assert_eq!(RsnInformation::parse(&bytes).as_ref(), Ok(&info));
    }
});
