use serde::Serialize;

use crate::model::choice::ChoiceRecord;
use crate::session::Session;

/// Choices reshaped into index-aligned columns, one entry per record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ChoicesTable {
    pub gameweek_no: Vec<u32>,
    pub team_choice: Vec<String>,
    pub player_choice: Vec<String>,
    pub player_point_awarded: Vec<Option<bool>>,
    pub team_point_awarded: Vec<Option<bool>>,
}

impl ChoicesTable {
    pub fn len(&self) -> usize {
        self.gameweek_no.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gameweek_no.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Highlight {
    Green,
    Red,
}

impl Highlight {
    pub fn from_point(awarded: bool) -> Self {
        if awarded { Highlight::Green } else { Highlight::Red }
    }

    pub fn css(self) -> &'static str {
        match self {
            Highlight::Green => "background-color: green",
            Highlight::Red => "background-color: red",
        }
    }
}

/// Which picks scored, aligned with the rows of a [`ChoicesTable`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ColourMap {
    pub team_points: Vec<bool>,
    pub player_points: Vec<bool>,
}

impl ColourMap {
    pub fn team_colours(&self) -> Vec<Highlight> {
        self.team_points.iter().copied().map(Highlight::from_point).collect()
    }

    pub fn player_colours(&self) -> Vec<Highlight> {
        self.player_points.iter().copied().map(Highlight::from_point).collect()
    }
}

/// Project choice records into columns. Order is kept and duplicates are not removed.
pub fn format_choices(records: &[ChoiceRecord]) -> ChoicesTable {
    let mut table = ChoicesTable::default();
    for record in records {
        table.gameweek_no.push(record.gameweek_no);
        table.team_choice.push(record.team_name.clone());
        table
            .player_choice
            .push(format!("{} {}", record.player_first_name, record.player_surname));
        table.player_point_awarded.push(record.player_point_awarded);
        table.team_point_awarded.push(record.team_point_awarded);
    }
    table
}

/// Unscored (`None`) picks are treated as not awarded.
pub fn build_colour_map(table: &ChoicesTable) -> ColourMap {
    ColourMap {
        team_points: table.team_point_awarded.iter().map(|p| p.unwrap_or(false)).collect(),
        player_points: table.player_point_awarded.iter().map(|p| p.unwrap_or(false)).collect(),
    }
}

/// Choices of `funballer_name` the session is allowed to see. Funballers see all
/// of their own picks; anyone else's are limited to gameweeks before `gameweek_no_limit`.
pub fn visible_choices(
    records: Vec<ChoiceRecord>,
    funballer_name: &str,
    session: &Session,
    gameweek_no_limit: u32,
) -> Vec<ChoiceRecord> {
    if session.is_funballer(funballer_name) {
        return records;
    }
    records
        .into_iter()
        .filter(|c| (1..gameweek_no_limit).contains(&c.gameweek_no))
        .collect()
}
