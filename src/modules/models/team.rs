use regex::Regex;
use serde::Serialize;

/// # static team profile
/// historical constructor data that the remote api does not serve; joined at
/// render time with the live constructor standings.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TeamProfile {
    pub id: &'static str,
    pub name: &'static str,
    pub full_name: &'static str,
    pub color: &'static str,
    pub logo: &'static str,
    pub base: &'static str,
    pub team_principal: &'static str,
    pub founded: &'static str,
    pub first_entry: &'static str,
    pub world_championships: u32,
    pub highest_finish: &'static str,
    pub pole_positions: u32,
    pub fastest_laps: u32,
    pub description: &'static str,
}

impl TeamProfile {
    /// # look up a team by constructor id
    /// unknown ids return `None`; the routes turn that into the not-found
    /// view instead of panicking.
    pub fn get(team_id: &str) -> Option<&'static TeamProfile> {
        TEAMS.iter().find(|team| team.id == team_id)
    }

    pub fn all() -> &'static [TeamProfile] {
        TEAMS
    }
}

/// strip everything that is not part of a constructor id. route handlers
/// compare the sanitized value against the raw input and reject mismatches.
pub fn sanitize_identifier(input: &str) -> String {
    let re = Regex::new(r"[^a-z0-9_]").unwrap();

    re.replace_all(&input.to_lowercase(), "").to_string()
}

const TEAMS: &[TeamProfile] = &[
    TeamProfile {
        id: "mclaren",
        name: "McLaren",
        full_name: "McLaren F1 Team",
        color: "#FF8000",
        logo: "https://media.formula1.com/image/upload/f_auto/q_auto/content/dam/fom-website/teams/2025/mclaren.png",
        base: "Woking, United Kingdom",
        team_principal: "Andrea Stella",
        founded: "1963",
        first_entry: "1966",
        world_championships: 8,
        highest_finish: "1st (183 wins)",
        pole_positions: 156,
        fastest_laps: 163,
        description: "McLaren Racing is one of the most successful teams in Formula One history. Founded by New Zealand racing driver Bruce McLaren, the team has won 8 Constructors Championships and produced legends like Ayrton Senna, Alain Prost, and Mika Häkkinen.",
    },
    TeamProfile {
        id: "red_bull",
        name: "Red Bull Racing",
        full_name: "Oracle Red Bull Racing",
        color: "#3671C6",
        logo: "https://media.formula1.com/image/upload/f_auto/q_auto/content/dam/fom-website/teams/2025/red-bull-racing.png",
        base: "Milton Keynes, United Kingdom",
        team_principal: "Christian Horner",
        founded: "2005",
        first_entry: "2005",
        world_championships: 6,
        highest_finish: "1st (120 wins)",
        pole_positions: 103,
        fastest_laps: 97,
        description: "Red Bull Racing emerged from the ashes of Jaguar Racing and quickly became a dominant force. Under the guidance of Adrian Newey, they won four consecutive championships with Sebastian Vettel (2010-2013) and dominated the turbo-hybrid era with Max Verstappen.",
    },
    TeamProfile {
        id: "ferrari",
        name: "Ferrari",
        full_name: "Scuderia Ferrari",
        color: "#E80020",
        logo: "https://media.formula1.com/image/upload/f_auto/q_auto/content/dam/fom-website/teams/2025/ferrari.png",
        base: "Maranello, Italy",
        team_principal: "Frédéric Vasseur",
        founded: "1929",
        first_entry: "1950",
        world_championships: 16,
        highest_finish: "1st (246 wins)",
        pole_positions: 251,
        fastest_laps: 260,
        description: "Scuderia Ferrari is the most successful and longest-standing team in Formula One history. The Prancing Horse has won more races, more championships, and more pole positions than any other team. Legends like Michael Schumacher, Niki Lauda, and Kimi Räikkönen have driven for the Scuderia.",
    },
    TeamProfile {
        id: "mercedes",
        name: "Mercedes",
        full_name: "Mercedes-AMG Petronas F1 Team",
        color: "#27F4D2",
        logo: "https://media.formula1.com/image/upload/f_auto/q_auto/content/dam/fom-website/teams/2025/mercedes.png",
        base: "Brackley, United Kingdom",
        team_principal: "Toto Wolff",
        founded: "2010",
        first_entry: "2010",
        world_championships: 8,
        highest_finish: "1st (125 wins)",
        pole_positions: 136,
        fastest_laps: 99,
        description: "Mercedes returned to F1 as a works team in 2010 after purchasing Brawn GP. They dominated the turbo-hybrid era from 2014-2021, winning 8 consecutive Constructors Championships. Lewis Hamilton won 6 of his 7 World Championships with Mercedes.",
    },
    TeamProfile {
        id: "aston_martin",
        name: "Aston Martin",
        full_name: "Aston Martin Aramco F1 Team",
        color: "#229971",
        logo: "https://media.formula1.com/image/upload/f_auto/q_auto/content/dam/fom-website/teams/2025/aston-martin.png",
        base: "Silverstone, United Kingdom",
        team_principal: "Mike Krack",
        founded: "2021",
        first_entry: "2021",
        world_championships: 0,
        highest_finish: "2nd",
        pole_positions: 1,
        fastest_laps: 3,
        description: "Aston Martin returned to Formula One as a constructor in 2021, rebranding from Racing Point. The team is owned by Lawrence Stroll and aims to become a championship-winning team with major investment in new facilities and staff.",
    },
    TeamProfile {
        id: "alpine",
        name: "Alpine",
        full_name: "BWT Alpine F1 Team",
        color: "#FF87BC",
        logo: "https://media.formula1.com/image/upload/f_auto/q_auto/content/dam/fom-website/teams/2025/alpine.png",
        base: "Enstone, United Kingdom",
        team_principal: "Oliver Oakes",
        founded: "2021",
        first_entry: "2021",
        world_championships: 2,
        highest_finish: "1st (21 wins as Renault)",
        pole_positions: 20,
        fastest_laps: 15,
        description: "Alpine is the rebrand of the Renault works team. The team's heritage includes World Championships won by Fernando Alonso (2005-2006). They continue to develop their own power unit and aim to return to the front of the grid.",
    },
    TeamProfile {
        id: "williams",
        name: "Williams",
        full_name: "Williams Racing",
        color: "#1868DB",
        logo: "https://media.formula1.com/image/upload/f_auto/q_auto/content/dam/fom-website/teams/2025/williams.png",
        base: "Grove, United Kingdom",
        team_principal: "James Vowles",
        founded: "1977",
        first_entry: "1978",
        world_championships: 9,
        highest_finish: "1st (114 wins)",
        pole_positions: 128,
        fastest_laps: 133,
        description: "Williams is one of the most successful teams in F1 history. Founded by Sir Frank Williams and Patrick Head, the team won 9 Constructors Championships and produced champions like Nelson Piquet, Nigel Mansell, Alain Prost, and Damon Hill.",
    },
    TeamProfile {
        id: "rb",
        name: "RB",
        full_name: "Visa Cash App RB F1 Team",
        color: "#6692FF",
        logo: "https://media.formula1.com/image/upload/f_auto/q_auto/content/dam/fom-website/teams/2025/rb.png",
        base: "Faenza, Italy",
        team_principal: "Laurent Mekies",
        founded: "2006",
        first_entry: "2006",
        world_championships: 0,
        highest_finish: "1st (2 wins)",
        pole_positions: 1,
        fastest_laps: 3,
        description: "RB (formerly AlphaTauri/Toro Rosso) is Red Bull's sister team and serves as a development pathway for young drivers. Notable graduates include Sebastian Vettel, Daniel Ricciardo, and Max Verstappen. The team scored a famous win with Pierre Gasly at Monza 2020.",
    },
    TeamProfile {
        id: "haas",
        name: "Haas",
        full_name: "MoneyGram Haas F1 Team",
        color: "#B6BABD",
        logo: "https://media.formula1.com/image/upload/f_auto/q_auto/content/dam/fom-website/teams/2025/haas.png",
        base: "Kannapolis, United States",
        team_principal: "Ayao Komatsu",
        founded: "2016",
        first_entry: "2016",
        world_championships: 0,
        highest_finish: "4th",
        pole_positions: 1,
        fastest_laps: 2,
        description: "Haas F1 Team is the only American constructor in Formula One. Founded by industrialist Gene Haas, the team uses a unique business model with close ties to Ferrari. They achieved their best finish of 5th in the Constructors Championship in 2018.",
    },
    TeamProfile {
        id: "sauber",
        name: "Sauber",
        full_name: "Stake F1 Team Kick Sauber",
        color: "#52E252",
        logo: "https://media.formula1.com/image/upload/f_auto/q_auto/content/dam/fom-website/teams/2025/kick-sauber.png",
        base: "Hinwil, Switzerland",
        team_principal: "Mattia Binotto",
        founded: "1993",
        first_entry: "1993",
        world_championships: 0,
        highest_finish: "1st (1 win as BMW Sauber)",
        pole_positions: 1,
        fastest_laps: 5,
        description: "Sauber Motorsport is a Swiss team that has competed in F1 since 1993. The team has served as a launching pad for drivers like Kimi Räikkönen, Felipe Massa, and Sergio Pérez. From 2026, it will become the Audi works team.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ids_resolve() {
        let team = TeamProfile::get("mclaren").unwrap();

        assert_eq!(team.name, "McLaren");
        assert_eq!(team.color, "#FF8000");
    }

    #[test]
    fn unknown_ids_return_none() {
        assert!(TeamProfile::get("brawn_gp").is_none());
        assert!(TeamProfile::get("").is_none());
    }

    #[test]
    fn all_teams_have_unique_ids() {
        let mut ids: Vec<&str> = TeamProfile::all().iter().map(|team| team.id).collect();
        let before = ids.len();
        ids.sort();
        ids.dedup();

        assert_eq!(ids.len(), before);
        assert_eq!(before, 10);
    }

    #[test]
    fn sanitizing_keeps_valid_identifiers_intact() {
        assert_eq!(sanitize_identifier("red_bull"), "red_bull");
        assert_eq!(sanitize_identifier("../etc/passwd"), "etcpasswd");
        assert_ne!(sanitize_identifier("McLaren!"), "McLaren!");
    }
}
