use huffman::{build, decode, encode};

fn main() {
    let input = (0..100_000)
        .map(|i: u32| (i.wrapping_mul(2654435761) >> 16).trailing_zeros() as u8)
        .collect::<Vec<_>>();

    for _ in 0..200 {
        let tree = build(&input).expect("non-empty input");
        let bits = encode(&tree, &input).expect("symbols come from the input");
        let decoded = decode(&tree, bits).expect("bits come from encode");
        assert_eq!(decoded.len(), input.len());
    }
}
