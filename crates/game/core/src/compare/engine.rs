//! The attribute comparison engine.
//!
//! [`compare`] walks every attribute of the target, resolves its kind through
//! the variant's [`RuleTable`] and produces one [`Verdict`] per compared key.
//! It is a pure function: no I/O, no shared state, same inputs give the same
//! [`Comparison`].
//!
//! Rules per kind:
//!
//! - **Ordered**: sentinel values match exactly; `" / "`-joined values compare
//!   as token sets; otherwise both sides are parsed as numbers and yield
//!   `correct` / `higher` / `lower`, falling back to exact string equality
//!   when either side does not parse.
//! - **Fuzzy-ordinal**: case-folded equality, then substring containment in
//!   either direction (`close`).
//! - **Categorical**: token sets from the table's tokenizer; equal sets are
//!   `correct`, overlapping sets `close`, disjoint sets `wrong`.
//!
//! Missing or blank values are decided before any rule runs: missing on both
//! sides is `correct`, missing on one side is `wrong`.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use super::verdict::Verdict;
use crate::entity::{AttributeValue, Entity};
use crate::rules::{AttributeKind, ORDERED_DELIMITER, RuleTable, Tokenizer};

/// Verdicts for one guess against the target, keyed by attribute.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comparison {
    verdicts: BTreeMap<String, Verdict>,
    /// Target keys the guess had no value for. Each one is a data-integrity
    /// problem in the roster; the caller decides how to report it.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    missing: Vec<String>,
}

impl Comparison {
    pub fn get(&self, key: &str) -> Option<Verdict> {
        self.verdicts.get(key).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Verdict)> {
        self.verdicts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.verdicts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verdicts.is_empty()
    }

    /// True when every compared attribute is `correct`.
    pub fn is_all_correct(&self) -> bool {
        self.verdicts.values().all(|v| v.is_correct())
    }

    /// Target keys absent from the guess entity.
    pub fn missing_keys(&self) -> &[String] {
        &self.missing
    }
}

/// Compares `guess` against `target` under `rules`.
pub fn compare(rules: &RuleTable, guess: &Entity, target: &Entity) -> Comparison {
    let mut comparison = Comparison::default();

    for (key, target_value) in target.attributes() {
        let kind = rules.kind_of(key);
        if kind.is_excluded() {
            continue;
        }

        let guess_value = guess.get(key);
        if guess_value.is_none() {
            comparison.missing.push(key.to_owned());
        }

        let verdict = compare_values(&kind, rules.tokenizer, guess_value, Some(target_value));
        comparison.verdicts.insert(key.to_owned(), verdict);
    }

    comparison
}

/// Compares two raw values under a single attribute kind.
///
/// `Excluded` is treated like an exact match so callers comparing a single
/// value in isolation still get a total answer.
pub fn compare_values(
    kind: &AttributeKind,
    tokenizer: Tokenizer,
    guess: Option<&AttributeValue>,
    target: Option<&AttributeValue>,
) -> Verdict {
    let (guess, target) = match (present(guess), present(target)) {
        (None, None) => return Verdict::Correct,
        (None, Some(_)) | (Some(_), None) => return Verdict::Wrong,
        (Some(guess), Some(target)) => (guess, target),
    };

    match kind {
        AttributeKind::Excluded => exact(&guess, &target),
        AttributeKind::Ordered { sentinel } => ordered(&guess, &target, sentinel.as_deref()),
        AttributeKind::FuzzyOrdinal => fuzzy(&guess, &target),
        AttributeKind::Categorical => {
            set_overlap(&tokenizer.tokenize(&guess), &tokenizer.tokenize(&target))
        }
    }
}

fn present(value: Option<&AttributeValue>) -> Option<Cow<'_, str>> {
    value.filter(|v| !v.is_blank()).map(AttributeValue::as_text)
}

fn exact(guess: &str, target: &str) -> Verdict {
    if guess == target {
        Verdict::Correct
    } else {
        Verdict::Wrong
    }
}

fn ordered(guess: &str, target: &str, sentinel: Option<&str>) -> Verdict {
    if let Some(sentinel) = sentinel
        && (guess == sentinel || target == sentinel)
    {
        return exact(guess, target);
    }

    if guess.contains(ORDERED_DELIMITER) || target.contains(ORDERED_DELIMITER) {
        return set_overlap(&split_ordered(guess), &split_ordered(target));
    }

    match (parse_number(guess), parse_number(target)) {
        (Some(g), Some(t)) => match g.partial_cmp(&t) {
            Some(Ordering::Greater) => Verdict::Higher,
            Some(Ordering::Less) => Verdict::Lower,
            _ => Verdict::Correct,
        },
        _ => exact(guess, target),
    }
}

fn split_ordered(raw: &str) -> BTreeSet<String> {
    raw.split(ORDERED_DELIMITER)
        .map(|token| token.trim().to_owned())
        .collect()
}

/// Finite numbers only; "NaN" and "inf" fall back to string comparison.
fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

fn fuzzy(guess: &str, target: &str) -> Verdict {
    let guess = guess.trim().to_lowercase();
    let target = target.trim().to_lowercase();

    if guess == target {
        Verdict::Correct
    } else if guess.contains(&target) || target.contains(&guess) {
        Verdict::Close
    } else {
        Verdict::Wrong
    }
}

fn set_overlap(guess: &BTreeSet<String>, target: &BTreeSet<String>) -> Verdict {
    if guess == target {
        Verdict::Correct
    } else if !guess.is_disjoint(target) {
        Verdict::Close
    } else {
        Verdict::Wrong
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Variant;

    fn clash() -> RuleTable {
        Variant::ClashRoyale.rules()
    }

    fn brawl() -> RuleTable {
        Variant::BrawlStars.rules()
    }

    fn card(name: &str) -> Entity {
        Entity::new(name)
    }

    fn verdict(rules: &RuleTable, key: &str, guess: AttributeValue, target: AttributeValue) -> Verdict {
        let guess = card("guess").with(key, guess);
        let target = card("target").with(key, target);
        compare(rules, &guess, &target)
            .get(key)
            .expect("key should be compared")
    }

    fn knight() -> Entity {
        card("Knight")
            .with("rarity", "Common")
            .with("cost", 3)
            .with("type", "Troop")
            .with("targets", "Ground")
            .with("healthCategory", "High")
            .with("arena", 0)
            .with("moveSpeed", "Medium")
            .with("year", 2016)
            .with("healthValue", 1766)
            .with("hint1", "Ready to rumble!")
    }

    fn baby_dragon() -> Entity {
        card("Baby Dragon")
            .with("rarity", "Epic")
            .with("cost", 4)
            .with("type", "Troop")
            .with("targets", "Air / Ground")
            .with("healthCategory", "Medium")
            .with("arena", 0)
            .with("moveSpeed", "Fast")
            .with("year", 2016)
            .with("healthValue", 1152)
            .with("hint1", "Breathes fire!")
    }

    #[test]
    fn target_against_itself_is_all_correct() {
        for entity in [knight(), baby_dragon()] {
            let comparison = compare(&clash(), &entity, &entity);
            assert!(!comparison.is_empty());
            assert!(comparison.is_all_correct(), "{comparison:?}");
        }
    }

    #[test]
    fn verdict_keys_are_target_keys_minus_excluded() {
        let guess = knight().with("extraGuessOnly", "x");
        let comparison = compare(&clash(), &guess, &baby_dragon());

        let keys: Vec<&str> = comparison.iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            ["arena", "cost", "healthCategory", "moveSpeed", "rarity", "targets", "type", "year"]
        );
    }

    #[test]
    fn knight_against_baby_dragon() {
        let comparison = compare(&clash(), &knight(), &baby_dragon());

        assert_eq!(comparison.get("rarity"), Some(Verdict::Wrong));
        assert_eq!(comparison.get("cost"), Some(Verdict::Lower));
        assert_eq!(comparison.get("type"), Some(Verdict::Correct));
        assert_eq!(comparison.get("targets"), Some(Verdict::Close));
        assert_eq!(comparison.get("healthCategory"), Some(Verdict::Wrong));
        assert_eq!(comparison.get("arena"), Some(Verdict::Correct));
        assert_eq!(comparison.get("moveSpeed"), Some(Verdict::Wrong));
        assert_eq!(comparison.get("year"), Some(Verdict::Correct));
        assert!(comparison.missing_keys().is_empty());
    }

    #[test]
    fn categorical_is_case_insensitive() {
        assert_eq!(verdict(&clash(), "rarity", "EPIC".into(), "epic".into()), Verdict::Correct);
    }

    #[test]
    fn superset_guess_is_close() {
        let v = verdict(&clash(), "targets", "Air / Ground".into(), "Air".into());
        assert_eq!(v, Verdict::Close);
    }

    #[test]
    fn multi_value_order_does_not_matter() {
        let v = verdict(&clash(), "targets", "Ground & Air".into(), "Air / Ground".into());
        assert_eq!(v, Verdict::Correct);
    }

    #[test]
    fn categorical_symmetry() {
        let pairs = [
            ("Air / Ground", "Air"),
            ("Air / Ground", "Ground, Air"),
            ("Buildings", "Air / Ground"),
            ("Troop", "troop"),
            ("Spell and Building", "Building"),
        ];
        for (a, b) in pairs {
            let ab = verdict(&clash(), "targets", a.into(), b.into());
            let ba = verdict(&clash(), "targets", b.into(), a.into());
            assert_eq!(ab, ba, "{a} vs {b}");
            assert!(!ab.is_directional());
        }
    }

    #[test]
    fn numeric_guess_above_target_is_higher() {
        assert_eq!(verdict(&clash(), "cost", 6.into(), 4.into()), Verdict::Higher);
        assert_eq!(verdict(&clash(), "cost", 2.into(), 4.into()), Verdict::Lower);
        assert_eq!(verdict(&clash(), "cost", 4.into(), "4".into()), Verdict::Correct);
    }

    #[test]
    fn distinct_numbers_are_exactly_higher_or_lower() {
        let values = [-2_i64, 0, 1, 3, 7, 2016, 2025];
        for g in values {
            for t in values {
                let v = verdict(&brawl(), "releaseYear", g.into(), t.into());
                match g.cmp(&t) {
                    Ordering::Greater => assert_eq!(v, Verdict::Higher),
                    Ordering::Less => assert_eq!(v, Verdict::Lower),
                    Ordering::Equal => assert_eq!(v, Verdict::Correct),
                }
            }
        }
    }

    #[test]
    fn decimal_strings_are_ordered_numerically() {
        assert_eq!(verdict(&clash(), "cost", "1.5".into(), "2".into()), Verdict::Lower);
        assert_eq!(verdict(&clash(), "cost", " 10 ".into(), "9".into()), Verdict::Higher);
    }

    #[test]
    fn sentinel_matches_only_itself() {
        assert_eq!(verdict(&clash(), "year", "Other".into(), "Other".into()), Verdict::Correct);
        assert_eq!(verdict(&clash(), "year", 2020.into(), "Other".into()), Verdict::Wrong);
        assert_eq!(verdict(&clash(), "year", "Other".into(), 2020.into()), Verdict::Wrong);
    }

    #[test]
    fn sentinel_is_ordinary_text_without_configuration() {
        // Brawl Stars declares no sentinel, so "Other" is just unparseable text.
        assert_eq!(verdict(&brawl(), "releaseYear", "Other".into(), "Other".into()), Verdict::Correct);
        assert_eq!(verdict(&brawl(), "releaseYear", "Other".into(), 2020.into()), Verdict::Wrong);
    }

    #[test]
    fn multi_value_numbers_compare_as_sets() {
        assert_eq!(verdict(&clash(), "cost", "3 / 6".into(), "6 / 3".into()), Verdict::Correct);
        assert_eq!(verdict(&clash(), "cost", "3 / 6".into(), 3.into()), Verdict::Close);
        assert_eq!(verdict(&clash(), "cost", 4.into(), "3 / 6".into()), Verdict::Wrong);
    }

    #[test]
    fn unparseable_numbers_fall_back_to_exact_string_equality() {
        assert_eq!(verdict(&clash(), "arena", "Legendary".into(), "Legendary".into()), Verdict::Correct);
        assert_eq!(verdict(&clash(), "arena", "legendary".into(), "Legendary".into()), Verdict::Wrong);
        assert_eq!(verdict(&clash(), "arena", "NaN".into(), 3.into()), Verdict::Wrong);
        assert_eq!(verdict(&clash(), "arena", "inf".into(), "inf".into()), Verdict::Correct);
    }

    #[test]
    fn fuzzy_speed_uses_substring_containment() {
        assert_eq!(verdict(&clash(), "moveSpeed", "Very Fast".into(), "Fast".into()), Verdict::Close);
        assert_eq!(verdict(&clash(), "moveSpeed", "Fast".into(), "Very Fast".into()), Verdict::Close);
        assert_eq!(verdict(&clash(), "moveSpeed", "Slow".into(), "Fast".into()), Verdict::Wrong);
        assert_eq!(verdict(&clash(), "moveSpeed", " FAST".into(), "fast ".into()), Verdict::Correct);
    }

    #[test]
    fn brawl_categorical_splits_on_spaced_slash_only() {
        assert_eq!(verdict(&brawl(), "range", "Normal / Long".into(), "Long / Normal".into()), Verdict::Correct);
        assert_eq!(verdict(&brawl(), "range", "Normal / Long".into(), "Normal".into()), Verdict::Close);
        assert_eq!(verdict(&brawl(), "range", "Normal, Long".into(), "Normal".into()), Verdict::Wrong);
    }

    #[test]
    fn unknown_keys_use_the_categorical_rule() {
        assert_eq!(verdict(&clash(), "elixirType", "Dark / Normal".into(), "normal".into()), Verdict::Close);
        assert_eq!(verdict(&brawl(), "starPower", "2".into(), "10".into()), Verdict::Wrong);
    }

    #[test]
    fn missing_values_follow_the_explicit_policy() {
        let rules = clash();
        let target = card("t").with("rarity", "Epic").with("cost", "").with("targets", " ");
        let guess = card("g").with("targets", "");

        let comparison = compare(&rules, &guess, &target);

        // Present on target, absent on guess.
        assert_eq!(comparison.get("rarity"), Some(Verdict::Wrong));
        // Blank on target, absent on guess.
        assert_eq!(comparison.get("cost"), Some(Verdict::Correct));
        // Blank on both.
        assert_eq!(comparison.get("targets"), Some(Verdict::Correct));
        assert_eq!(comparison.missing_keys(), ["cost", "rarity"]);

        let v = compare_values(&AttributeKind::ordered(), Tokenizer::Delimited, Some(&4.into()), None);
        assert_eq!(v, Verdict::Wrong);
    }

    #[test]
    fn comparison_is_deterministic() {
        let rules = clash();
        let first = compare(&rules, &knight(), &baby_dragon());
        for _ in 0..10 {
            assert_eq!(compare(&rules, &knight(), &baby_dragon()), first);
        }
    }
}
