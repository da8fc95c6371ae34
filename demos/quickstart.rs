use ajd::{Ajd, FixedOffset, UT};

fn main() -> ajd::Result<()> {
    let now = Ajd::now()?;
    let now_utc = now.rezone(UT)?;
    let new_york = now.rezone(FixedOffset::from_hours_minutes(-5, 0)?)?;

    println!("JST: {now}");
    println!("UTC: {now_utc}");
    println!("UTC-5: {new_york}");
    println!("midnight (JST): {}", now.truncate_to_midnight()?);

    let reform = Ajd::from_ymd_in(1582, 10, 4, UT)?.add_days(1)?;
    println!("day after 1582-10-04: {reform}");
    Ok(())
}
