#![no_main]
use huffman::{build, decode, encode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (Vec<u8>, Vec<u8>)| {
    let (input, noise) = data;
    let tree = match build(&input) {
        Ok(tree) => tree,
        Err(_) => {
            assert!(input.is_empty());
            return;
        }
    };

    let bits = encode(&tree, &input).unwrap();
    assert_eq!(decode(&tree, bits).unwrap(), input);

    // Arbitrary bit streams may fail but must not panic; 2 is an invalid bit.
    let _ = decode(&tree, noise.iter().map(|&b| b % 3));
});
