use crate::domain::player::Player;
use crate::error::{Result, SolidError};
use std::collections::HashMap;
use std::io::Read;

const ID_COLUMN: &str = "id";

/// Reads players from a CSV source with an `id` column.
///
/// Every other non-empty column becomes a string attribute of the player.
pub struct PlayerReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> PlayerReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    pub fn players(self) -> impl Iterator<Item = Result<Player>> {
        self.reader
            .into_deserialize::<HashMap<String, String>>()
            .map(|result| result.map_err(SolidError::from).and_then(into_player))
    }
}

fn into_player(mut row: HashMap<String, String>) -> Result<Player> {
    let raw_id = row
        .remove(ID_COLUMN)
        .ok_or_else(|| SolidError::InvalidInput("player row has no id column".to_string()))?;
    let id = raw_id
        .parse::<u32>()
        .map_err(|e| SolidError::InvalidInput(format!("player id {raw_id:?}: {e}")))?;

    Ok(row
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .fold(Player::new(id), |player, (key, value)| {
            player.with_attribute(key, value)
        }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_reads_attributes() {
        let data = "id, name, team\n1, ana, red\n2, bo, ";
        let players: Vec<Player> = PlayerReader::new(data.as_bytes())
            .players()
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(players.len(), 2);
        assert_eq!(
            players[0],
            Player::new(1)
                .with_attribute("name", "ana")
                .with_attribute("team", "red")
        );
        assert_eq!(players[1].attribute("name"), Some(&Value::from("bo")));
        assert!(players[1].attribute("team").is_none());
    }

    #[test]
    fn test_bad_id() {
        let data = "id, name\nx, ana\n3, cy";
        let results: Vec<Result<Player>> = PlayerReader::new(data.as_bytes()).players().collect();

        assert!(matches!(results[0], Err(SolidError::InvalidInput(_))));
        assert_eq!(results[1].as_ref().unwrap().id, 3);
    }

    #[test]
    fn test_missing_id_column() {
        let data = "name\nana";
        let results: Vec<Result<Player>> = PlayerReader::new(data.as_bytes()).players().collect();
        assert!(matches!(results[0], Err(SolidError::InvalidInput(_))));
    }
}
