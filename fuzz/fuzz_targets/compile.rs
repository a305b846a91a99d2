#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let Ok(postfix) = repost::to_postfix(data) else { return };

    // the builder may still reject operators the encoder let through, but
    // it must never panic
    let _ = repost::build_nfa(data);

    // a decodable encoding must re-encode to itself
    if let Ok(infix) = repost::from_postfix(&postfix) {
        assert_eq!(repost::to_postfix(&infix).as_deref(), Ok(postfix.as_str()));
    }
});
