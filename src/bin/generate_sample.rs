use serde_json::{json, Value};

const CHROMOSOMES: [&str; 24] = [
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "14", "15", "16", "17",
    "18", "19", "20", "21", "22", "X", "Y",
];

/// Mutation types with rough relative frequencies in somatic calls.
const TYPES: [(&str, f64); 4] = [
    ("single base substitution", 0.86),
    ("deletion of <=200bp", 0.07),
    ("insertion of <=200bp", 0.05),
    ("multiple base substitution (>=2bp and <=200bp)", 0.02),
];

const BASES: [char; 4] = ['A', 'C', 'G', 'T'];

/// Seeded SplitMix64 stream, so every run writes the same sample file.
struct SampleRng(u64);

impl SampleRng {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in `[0, 1)`.
    fn unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }
}

fn pick_type(rng: &mut SampleRng) -> &'static str {
    let mut u = rng.unit();
    for (name, weight) in TYPES {
        if u < weight {
            return name;
        }
        u -= weight;
    }
    TYPES[0].0
}

fn random_bases(rng: &mut SampleRng, n: usize) -> String {
    (0..n).map(|_| BASES[rng.below(BASES.len())]).collect()
}

fn make_hit(rng: &mut SampleRng, idx: usize) -> Value {
    let chromosome = CHROMOSOMES[rng.below(CHROMOSOMES.len())];
    let mutation_type = pick_type(rng);
    let start = 1_000_000 + rng.below(150_000_000) as i64;

    let (mutation, len) = match mutation_type {
        "single base substitution" => {
            let from = random_bases(rng, 1);
            let mut to = random_bases(rng, 1);
            while to == from {
                to = random_bases(rng, 1);
            }
            (format!("{from}>{to}"), 1)
        }
        "deletion of <=200bp" => {
            let len = 1 + rng.below(12);
            (format!("{}>-", random_bases(rng, len)), len)
        }
        "insertion of <=200bp" => {
            let n = 1 + rng.below(8);
            (format!("->{}", random_bases(rng, n)), 1)
        }
        _ => {
            let len = 2 + rng.below(3);
            (format!("{}>{}", random_bases(rng, len), random_bases(rng, len)), len)
        }
    };

    json!({
        "id": format!("MU{}", 1_000_000 + idx * 37),
        "chromosome": chromosome,
        "type": mutation_type,
        "mutation": mutation,
        "start": start,
        "end": start + len as i64 - 1,
        "study": ["PCAWG"],
    })
}

fn main() {
    let mut rng = SampleRng(42);
    let n_hits = 100;

    let hits: Vec<Value> = (0..n_hits).map(|i| make_hit(&mut rng, i)).collect();
    let envelope = json!({
        "facets": {},
        "hits": hits,
        "pagination": { "count": n_hits, "total": n_hits, "size": n_hits, "from": 1 },
    });

    let output_path = "sample_mutations.json";
    let text = serde_json::to_string_pretty(&envelope).expect("Failed to serialize sample");
    std::fs::write(output_path, text).expect("Failed to write output file");

    println!("Wrote {n_hits} mutations to {output_path}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_hits() {
        let a: Vec<Value> = (0..5).map(|i| make_hit(&mut SampleRng(7), i)).collect();
        let b: Vec<Value> = (0..5).map(|i| make_hit(&mut SampleRng(7), i)).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_hits_use_known_labels() {
        let mut rng = SampleRng(42);
        for i in 0..200 {
            let hit = make_hit(&mut rng, i);
            assert!(CHROMOSOMES.contains(&hit["chromosome"].as_str().unwrap()));
            let kind = hit["type"].as_str().unwrap();
            assert!(TYPES.iter().any(|(name, _)| *name == kind));
            assert!(hit["end"].as_i64().unwrap() >= hit["start"].as_i64().unwrap());
        }
    }
}
