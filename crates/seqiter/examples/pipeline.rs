use seqiter::{BoxedSeqIterator, Result, SeqIterator, slice};

fn main() -> Result<()> {
    let words = ["a", "bb", "ccc", "dddd"].map(String::from);

    let shouted = slice(&words)
        .filter(|word| word.len() % 2 == 0)
        .map(|word| word.to_uppercase())
        .collect()?;
    assert_eq!(shouted, ["BB", "DDDD"]);

    let total = slice(&[1, 2, 3, 4]).reduce(|acc: i32, x| acc + x)?;
    assert_eq!(total, 10);

    let lengths = slice(&words).map_into(|word| word.len()).collect()?;
    assert_eq!(lengths, [1, 2, 3, 4]);

    // Stages picked at runtime
    let mut chain: BoxedSeqIterator<'_, String> = slice(&words).boxed();
    for min_len in [2, 3] {
        chain = chain.filter(move |word| word.len() >= min_len).boxed();
    }
    assert_eq!(chain.collect()?, ["ccc", "dddd"]);

    Ok(())
}
