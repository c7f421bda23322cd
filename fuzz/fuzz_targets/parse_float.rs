#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(value) = floatparse::parse_float(text) else {
        return;
    };

    // Decimal results stay within one step of the correctly rounded value.
    let text = text.trim_matches(|c: char| c <= ' ');
    let digits = text.strip_suffix(['f', 'F', 'd', 'D']).unwrap_or(text);
    if let Ok(expected) = digits.parse::<f32>() {
        if !expected.is_nan() {
            assert!(value.to_bits().abs_diff(expected.to_bits()) <= 1, "{:?}", text);
        }
    }
});
