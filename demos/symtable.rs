use balgos::symtable::*;

fn put_and_query(session: &mut TableSession) -> Result<(), SessionError<TableError>> {
    for (key, value) in [(3, 78), (6, 4), (2, 45), (1, 27), (2, 37), (8, 44)] {
        println!("{}", u8::from(session.put(key, value)?));
    }
    session.print_contains(0..10)?;
    session.print_keys()?;
    session.print_values()?;
    session.print_table()?;
    Ok(())
}

fn fill_and_drain(session: &mut TableSession) -> Result<(), SessionError<TableError>> {
    for key in 0..20 {
        session.put(key, key * key)?;
    }
    session.print_table()?;
    for key in 0..20 {
        session.delete(key)?;
    }
    session.print_table()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    for kind in [TableKind::Bst, TableKind::List, TableKind::Hash] {
        println!("== {:?}", kind);
        let settings = TableSettingsBuilder::default().kind(kind).build()?;
        put_and_query(&mut TableSession::new(settings.clone())?)?;
        fill_and_drain(&mut TableSession::new(settings)?)?;
    }

    // log every operation of a small session
    let settings = TableSettingsBuilder::default().verbose(true).build()?;
    let mut session = TableSession::new(settings)?;
    session.put(5, 25)?;
    session.put(5, 26)?;
    if let Err(e) = session.get(4) {
        println!("lookup failed: {}", e);
    }
    session.delete(5)?;
    Ok(())
}
