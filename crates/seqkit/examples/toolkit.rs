use seqkit::{
    Result, SeqIterator, maps,
    pointer::{self, Nil},
    seqiter, slice,
};

fn main() -> Result<()> {
    let scores = [90, 0, 72, 90, 0, 85, 72];

    let present = slice::compact(&scores);
    let distinct = slice::unique(&present);
    assert_eq!(distinct, [90, 72, 85]);

    let groups = slice::chunk(&distinct, 2)?;
    assert_eq!(groups, [&[90, 72][..], &[85][..]]);

    let passing = seqiter::slice(&distinct).filter(|s| *s >= 80).collect()?;
    assert_eq!(passing, [90, 85]);

    let names = vec!["ann", "bob", "cid"];
    let by_name = maps::combine(names.clone(), distinct)?;
    assert_eq!(by_name["bob"], 72);

    let mut keys = maps::keys(&by_name);
    keys.sort();
    assert_eq!(keys, names);

    assert!(maps::combine(vec!["x"], Vec::<i32>::new()).is_err());

    let ids = slice::flatten_str::<u32>("[[7, 3], [7]]")?;
    assert_eq!(slice::unique(&ids), [7, 3]);

    let best = pointer::to_non_nil(passing.first().copied());
    assert!(best.is_some_and(|b| !b.is_nil()));

    Ok(())
}
