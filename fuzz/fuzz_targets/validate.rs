#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    jdiff_fuzz::fuzz_validate(data);
});
