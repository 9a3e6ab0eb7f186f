//! CSV export for the one-shot commands.

use std::io::Write;

use anyhow::Result;
use flopboard_core::{IntervalColumn, MovieColumn};
use flopboard_types::{Movie, ProducerInterval};

pub fn write_winners<W: Write>(out: W, movies: &[Movie]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(MovieColumn::ALL.iter().map(|c| c.title()))?;
    for movie in movies {
        writer.write_record(MovieColumn::ALL.iter().map(|c| c.display(movie)))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_intervals<W: Write>(
    out: W,
    min: &[ProducerInterval],
    max: &[ProducerInterval],
) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    let mut header = vec!["Ranking".to_string()];
    header.extend(IntervalColumn::ALL.iter().map(|c| c.title().to_string()));
    writer.write_record(&header)?;
    for (ranking, entries) in [("min", min), ("max", max)] {
        for entry in entries {
            let mut row = vec![ranking.to_string()];
            row.extend(IntervalColumn::ALL.iter().map(|c| c.display(entry)));
            writer.write_record(&row)?;
        }
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_movie() -> Movie {
        Movie {
            id: 1,
            year: 1984,
            title: "Bolero".to_string(),
            studios: vec!["Cannon Films".to_string()],
            producers: vec!["Bo Derek".to_string()],
            winner: true,
        }
    }

    #[test]
    fn test_winners_csv_has_header_and_rows() {
        let mut buffer = Vec::new();
        write_winners(&mut buffer, &[sample_movie()]).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next().unwrap(), "Title,Year,Studios,Producers,Winner");
        assert_eq!(lines.next().unwrap(), "Bolero,1984,Cannon Films,Bo Derek,Yes");
    }

    #[test]
    fn test_intervals_csv_prefixes_ranking() {
        let entry = ProducerInterval {
            producer: "Buzz Feitshans".to_string(),
            interval: 9,
            previous_win: 1985,
            following_win: 1994,
        };
        let mut buffer = Vec::new();
        write_intervals(&mut buffer, &[entry.clone()], &[entry]).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("min,Buzz Feitshans,9,1985,1994"));
        assert!(text.contains("max,Buzz Feitshans,9,1985,1994"));
    }
}
