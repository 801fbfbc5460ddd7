use crate::models::Prediction;

/// Ordered (triggers, canonical ingredient) rules
///
/// The first rule with a trigger contained in the label wins, so a trigger
/// that is a substring of another must come after the more specific one.
const LABEL_RULES: &[(&[&str], &str)] = &[
    (&["banana"], "banana"),
    (&["apple"], "apple"),
    (&["broccoli"], "broccoli"),
    (&["cucumber"], "cucumber"),
    (&["tomato"], "tomato"),
    (&["bell pepper", "pepper"], "bell peppers"),
    (&["carrot"], "carrot"),
    (&["mushroom"], "mushrooms"),
    (&["onion"], "onion"),
    (&["garlic"], "garlic"),
    (&["bread"], "bread"),
    (&["egg"], "eggs"),
    (&["chicken"], "chicken"),
    (&["fish"], "fish"),
    (&["bottle gourd"], "bottle gourd"),
    (&["zucchini"], "zucchini"),
    (&["paneer", "cheese"], "paneer"),
    (&["tofu"], "tofu"),
    (&["basil"], "basil"),
    (&["lemon"], "lemon"),
    (&["avocado"], "avocado"),
    (&["rice"], "rice"),
    (&["pasta"], "pasta"),
];

/// Anything carrying a classifier label
pub trait Labelled {
    fn label(&self) -> &str;
}

impl Labelled for str {
    fn label(&self) -> &str {
        self
    }
}

impl Labelled for String {
    fn label(&self) -> &str {
        self
    }
}

impl Labelled for Prediction {
    fn label(&self) -> &str {
        &self.label
    }
}

impl<T: Labelled + ?Sized> Labelled for &T {
    fn label(&self) -> &str {
        (**self).label()
    }
}

/// Map a raw classifier label to a canonical pantry ingredient
///
/// Matching is case-insensitive substring containment. Returns `None` when
/// no rule applies, including for the empty label.
pub fn map_label(label: &str) -> Option<&'static str> {
    let label = label.to_lowercase();
    if label.is_empty() {
        return None;
    }

    LABEL_RULES
        .iter()
        .find(|(triggers, _)| triggers.iter().any(|t| label.contains(t)))
        .map(|(_, ingredient)| *ingredient)
}

/// Map labels in order and keep up to `n` distinct ingredients
///
/// Unmapped labels and repeats are skipped; iteration stops as soon as `n`
/// ingredients have been collected.
pub fn dedupe_top_n<I>(labels: I, n: usize) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Labelled,
{
    let mut mapped: Vec<String> = Vec::with_capacity(n);
    if n == 0 {
        return mapped;
    }

    for item in labels {
        let Some(ingredient) = map_label(item.label()) else {
            continue;
        };
        if !mapped.iter().any(|m| m == ingredient) {
            mapped.push(ingredient.to_string());
        }
        if mapped.len() >= n {
            break;
        }
    }

    mapped
}
