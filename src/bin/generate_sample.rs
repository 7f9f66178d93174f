use anyhow::Context;

use prize_atlas::data::model::{Laureate, Prize, PrizeLaureate};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform value in `0..n`.
    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.below(items.len())]
    }

    fn chance(&mut self, percent: u64) -> bool {
        self.next_u64() % 100 < percent
    }
}

const COUNTRIES: &[(&str, &str)] = &[
    ("FR", "France"),
    ("DE", "Germany"),
    ("US", "USA"),
    ("GB", "United Kingdom"),
    ("SE", "Sweden"),
    ("CH", "Switzerland"),
    ("NL", "the Netherlands"),
    ("JP", "Japan"),
];

const FIRSTNAMES: &[&str] = &[
    "Marie", "Pierre", "Albert", "Niels", "Erwin", "Lise", "Enrico", "Paul",
    "Max", "Dorothy", "Linus", "Barbara", "Richard", "Maria", "Werner",
];

const SURNAMES: &[&str] = &[
    "Durand", "Keller", "Hansen", "Mori", "Svensson", "Baker", "Visser",
    "Lang", "Moreau", "Clarke", "Weiss", "Tanaka", "Berg", "Fontaine",
];

const CATEGORIES: &[&str] = &["chemistry", "literature", "medicine", "peace", "physics"];

fn generate_laureates(rng: &mut SimpleRng, count: usize) -> Vec<Laureate> {
    let mut laureates = Vec::with_capacity(count + 2);

    for id in 1..=count {
        let (born_code, born_name) = *rng.pick(COUNTRIES);
        // Most records only carry a birth country, like the real data.
        let died = if rng.chance(35) {
            Some(*rng.pick(COUNTRIES))
        } else {
            None
        };

        laureates.push(Laureate {
            id: id.to_string(),
            firstname: rng.pick(FIRSTNAMES).to_string(),
            surname: Some(rng.pick(SURNAMES).to_string()),
            born_country: Some(born_name.to_string()),
            born_country_code: Some(born_code.to_string()),
            died_country: died.map(|(_, name)| name.to_string()),
            died_country_code: died.map(|(code, _)| code.to_string()),
            gender: Some(if rng.chance(50) { "female" } else { "male" }.to_string()),
        });
    }

    // An organization: name only, no surname, no gender.
    laureates.push(Laureate {
        id: (count + 1).to_string(),
        firstname: "Committee for Peaceful Research".to_string(),
        surname: None,
        born_country: Some("Switzerland".to_string()),
        born_country_code: Some("CH".to_string()),
        died_country: None,
        died_country_code: None,
        gender: Some("org".to_string()),
    });

    // A record with no countries at all: stays out of the map entirely.
    laureates.push(Laureate {
        id: (count + 2).to_string(),
        firstname: "Unknown".to_string(),
        surname: Some("Origins".to_string()),
        born_country: None,
        born_country_code: None,
        died_country: None,
        died_country_code: None,
        gender: None,
    });

    laureates
}

fn generate_prizes(rng: &mut SimpleRng, laureates: &[Laureate]) -> Vec<Prize> {
    let mut prizes = Vec::new();

    for year in 1901..=1930 {
        for category in CATEGORIES {
            // Not every category is awarded every year.
            if rng.chance(20) {
                continue;
            }
            let mut picks: Vec<&Laureate> = Vec::new();
            for _ in 0..1 + rng.below(3) {
                let laureate = rng.pick(laureates);
                // A shared prize never lists the same laureate twice.
                if picks.iter().all(|p| p.id != laureate.id) {
                    picks.push(laureate);
                }
            }
            let refs: Vec<PrizeLaureate> = picks
                .iter()
                .map(|laureate| PrizeLaureate {
                    id: laureate.id.clone(),
                    firstname: Some(laureate.firstname.clone()),
                    surname: laureate.surname.clone(),
                    motivation: Some(format!("for outstanding work in {category}")),
                    share: Some(picks.len().to_string()),
                })
                .collect();
            prizes.push(Prize {
                year: year.to_string(),
                category: category.to_string(),
                overall_motivation: None,
                laureates: refs,
            });
        }
    }

    prizes
}

fn main() -> anyhow::Result<()> {
    let mut rng = SimpleRng::new(42);

    let laureates = generate_laureates(&mut rng, 60);
    let prizes = generate_prizes(&mut rng, &laureates);

    let laureates_doc = serde_json::json!({ "laureates": &laureates });
    let prizes_doc = serde_json::json!({ "prizes": &prizes });

    std::fs::write(
        "sample-laureates.json",
        serde_json::to_string_pretty(&laureates_doc)?,
    )
    .context("writing sample-laureates.json")?;
    std::fs::write(
        "sample-prizes.json",
        serde_json::to_string_pretty(&prizes_doc)?,
    )
    .context("writing sample-prizes.json")?;

    println!(
        "Wrote {} laureates and {} prizes to sample-laureates.json / sample-prizes.json",
        laureates.len(),
        prizes.len()
    );
    Ok(())
}
