use balgos::unionfind::*;

const PAIRS_OF_THREE: [(usize, usize); 3] = [(0, 1), (0, 2), (1, 2)];

fn three_sites(unions: &[(usize, usize)]) -> Result<(), SessionError<UnionFindError>> {
    let mut session = ForestSession::new(3, false);
    for &(p, q) in unions {
        session.union(p, q)?;
    }
    session.print_roots()?;
    session.print_connected(&PAIRS_OF_THREE)?;
    session.print_count()?;
    Ok(())
}

fn twelve_sites() -> Result<(), SessionError<UnionFindError>> {
    // verbose: log each union as it is applied
    let mut session = ForestSession::new(12, true);
    let pairs = [
        (0, 2),
        (10, 5),
        (4, 2),
        (8, 9),
        (0, 7),
        (1, 7),
        (3, 11),
        (5, 8),
        (4, 7),
    ];
    for (p, q) in pairs {
        session.union(p, q)?;
    }
    session.print_roots()?;
    session.print_count()?;
    Ok(())
}

fn main() -> Result<(), SessionError<UnionFindError>> {
    three_sites(&[])?;
    three_sites(&[(0, 1)])?;
    three_sites(&[(0, 1), (1, 2)])?;
    twelve_sites()
}
