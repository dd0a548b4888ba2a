//! Correctness oracles, one per category.
//!
//! An oracle judges an output against its input without reusing any unit's
//! strategy: permutations are checked by counting, graph reachability by a
//! fixed-point closure, matches and palindromes by brute force. Tests use
//! these to hold every unit of a category to the same ground truth.

use std::collections::{HashMap, HashSet};

use crate::registry::Category;
use crate::value::{Input, Output, RsaAction, RsaTranscript, SortOrder, Summary};

/// `true` when `output` is a correct answer for `input` in `category`.
pub fn check(category: Category, input: &Input, output: &Output) -> bool {
    verdict(category, input, output).is_ok()
}

/// Like [`check`], but explains the first violation found.
pub fn verdict(category: Category, input: &Input, output: &Output) -> Result<(), String> {
    match (category, input, output) {
        (Category::Sorting, Input::Sequence { values, order }, Output::Sequence(sorted)) => {
            sorting(values, *order, sorted)
        }
        (
            Category::Searching | Category::SortedSearching,
            Input::Search { values, target },
            Output::Index(index),
        ) => searching(values, *target, *index),
        (Category::GraphTraversal, Input::Graph { adjacency, start }, Output::Visit(order)) => {
            traversal(adjacency, *start, order)
        }
        (
            Category::StringMatching,
            Input::Pattern { text, pattern },
            Output::Positions(positions),
        ) => matching(text, pattern, positions),
        (Category::Combinatorics, Input::Integer(n), Output::Integer(value)) => {
            expect_integer("n!", reference_factorial(*n), *value)
        }
        (Category::Recurrence, Input::Integer(n), Output::Integer(value)) => {
            // F(n) is the second half of the pair for n - 1, so F(n + 1) never has to fit
            let expected = match n.checked_sub(1) {
                None => Some(0),
                Some(k) => reference_fibonacci(k).map(|(_, f)| f),
            };
            expect_integer("F(n)", expected, *value)
        }
        (
            Category::DynamicProgramming,
            Input::Text(text),
            Output::Palindromes { found, count },
        ) => palindromes(text, found, *count),
        (Category::Statistics, Input::Sequence { values, .. }, Output::Statistics(summary)) => {
            statistics(values, summary)
        }
        (Category::Shuffling, Input::Seed(_), Output::Deck(cards)) => deck(cards),
        (
            Category::Cryptography,
            Input::Rsa(RsaAction::RoundTrip { message, .. }),
            Output::Rsa(transcript),
        ) => rsa(message, transcript),
        (
            Category::Cryptography,
            Input::Rsa(RsaAction::Encrypt {
                message,
                public_key,
            }),
            Output::Cipher(cipher),
        ) => encrypted(message, *public_key, cipher),
        (
            Category::Cryptography,
            Input::Rsa(RsaAction::Decrypt {
                cipher,
                private_key,
            }),
            Output::Plaintext(text),
        ) => decrypted(cipher, *private_key, text),
        _ => Err(format!(
            "output {:?} does not answer {:?} in category {}",
            output, input, category
        )),
    }
}

fn multiset<T: Eq + std::hash::Hash + Clone>(items: &[T]) -> HashMap<T, usize> {
    let mut counts = HashMap::new();
    for item in items {
        *counts.entry(item.clone()).or_insert(0) += 1;
    }
    counts
}

fn sorting(input: &[i64], order: SortOrder, output: &[i64]) -> Result<(), String> {
    if multiset(input) != multiset(output) {
        return Err(format!("{:?} is not a permutation of {:?}", output, input));
    }
    if let Some(i) = (1..output.len()).find(|&i| !order.in_order(output[i - 1], output[i])) {
        return Err(format!(
            "{:?} breaks {:?} order at index {}",
            output, order, i
        ));
    }
    Ok(())
}

fn searching(values: &[i64], target: i64, index: Option<usize>) -> Result<(), String> {
    match index {
        Some(i) if values.get(i) == Some(&target) => Ok(()),
        Some(i) => Err(format!("index {} does not hold target {}", i, target)),
        None if values.contains(&target) => {
            Err(format!("target {} is present but reported absent", target))
        }
        None => Ok(()),
    }
}

/// Nodes reachable from `start`, by repeated edge relaxation until nothing changes.
fn reachable(adjacency: &[Vec<usize>], start: usize) -> Vec<bool> {
    let mut seen = vec![false; adjacency.len()];
    seen[start] = true;
    let mut changed = true;
    while changed {
        changed = false;
        for (node, edges) in adjacency.iter().enumerate() {
            if !seen[node] {
                continue;
            }
            for &next in edges {
                if !seen[next] {
                    seen[next] = true;
                    changed = true;
                }
            }
        }
    }
    seen
}

fn traversal(adjacency: &[Vec<usize>], start: usize, order: &[usize]) -> Result<(), String> {
    if order.first() != Some(&start) {
        return Err(format!("visit order {:?} does not begin at {}", order, start));
    }

    let expected = reachable(adjacency, start);
    let mut visited = vec![false; adjacency.len()];
    for (pos, &node) in order.iter().enumerate() {
        if node >= adjacency.len() || !expected[node] {
            return Err(format!("node {} is not reachable from {}", node, start));
        }
        if visited[node] {
            return Err(format!("node {} visited twice", node));
        }
        // every node after the first must be discovered through an earlier one
        if pos > 0 && !order[..pos].iter().any(|&prev| adjacency[prev].contains(&node)) {
            return Err(format!("node {} has no edge from an earlier visited node", node));
        }
        visited[node] = true;
    }

    if let Some(missing) = (0..adjacency.len()).find(|&n| expected[n] && !visited[n]) {
        return Err(format!("reachable node {} was never visited", missing));
    }
    Ok(())
}

fn matching(text: &str, pattern: &str, positions: &[usize]) -> Result<(), String> {
    let t: Vec<char> = text.chars().collect();
    let p: Vec<char> = pattern.chars().collect();
    let expected: Vec<usize> = if p.is_empty() || p.len() > t.len() {
        Vec::new()
    } else {
        (0..=t.len() - p.len())
            .filter(|&i| t[i..i + p.len()] == p[..])
            .collect()
    };
    if positions == expected.as_slice() {
        Ok(())
    } else {
        Err(format!("expected matches {:?}, got {:?}", expected, positions))
    }
}

fn reference_factorial(n: u64) -> Option<u128> {
    (1..=n as u128).rev().try_fold(1u128, |acc, k| acc.checked_mul(k))
}

/// `(F(n), F(n+1))` by fast doubling; `None` if a value leaves `u128`.
fn reference_fibonacci(n: u64) -> Option<(u128, u128)> {
    if n == 0 {
        return Some((0, 1));
    }
    let (a, b) = reference_fibonacci(n / 2)?;
    // F(2k) = F(k) * (2F(k+1) - F(k)), F(2k+1) = F(k)^2 + F(k+1)^2
    let c = a.checked_mul(b.checked_mul(2)?.checked_sub(a)?)?;
    let d = a.checked_mul(a)?.checked_add(b.checked_mul(b)?)?;
    if n % 2 == 0 {
        Some((c, d))
    } else {
        Some((d, c.checked_add(d)?))
    }
}

fn expect_integer(what: &str, expected: Option<u128>, actual: u128) -> Result<(), String> {
    match expected {
        Some(value) if value == actual => Ok(()),
        Some(value) => Err(format!("{} should be {}, got {}", what, value, actual)),
        None => Err(format!("{} does not fit in u128, yet {} was reported", what, actual)),
    }
}

fn palindromes(text: &str, found: &[String], count: usize) -> Result<(), String> {
    let chars: Vec<char> = text.chars().collect();
    let mut expected = Vec::new();
    for i in 0..chars.len() {
        for j in i..chars.len() {
            let window = &chars[i..=j];
            if window.iter().eq(window.iter().rev()) {
                expected.push(window.iter().collect::<String>());
            }
        }
    }

    if count != expected.len() || found.len() != expected.len() {
        return Err(format!(
            "expected {} palindromic substrings, got count {} with {} listed",
            expected.len(),
            count,
            found.len()
        ));
    }
    if multiset(found) != multiset(&expected) {
        return Err("listed substrings differ from the palindromic substrings".into());
    }
    Ok(())
}

fn median_of(sorted: &[i64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        sorted[mid] as f64
    } else {
        (sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0
    }
}

fn statistics(values: &[i64], summary: &Summary) -> Result<(), String> {
    if values.is_empty() {
        return Err("statistics of an empty sequence".into());
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let n = sorted.len();

    let lower = &sorted[..n / 2];
    let upper = &sorted[(n + 1) / 2..];
    // a single value has empty halves; both quartiles collapse onto it
    let (q1, q3) = if n == 1 {
        (sorted[0] as f64, sorted[0] as f64)
    } else {
        (median_of(lower), median_of(upper))
    };

    let counts = multiset(values);
    let top = counts.values().copied().max().unwrap_or(0);
    let mode = (top > 1).then(|| {
        let mut modes: Vec<i64> = counts
            .iter()
            .filter(|&(_, &c)| c == top)
            .map(|(&v, _)| v)
            .collect();
        modes.sort_unstable();
        modes
    });

    let expected = Summary {
        smallest: sorted[0],
        largest: sorted[n - 1],
        median: median_of(&sorted),
        q1,
        q3,
        mode,
    };
    if &expected == summary {
        Ok(())
    } else {
        Err(format!("expected {:?}, got {:?}", expected, summary))
    }
}

fn deck(cards: &[String]) -> Result<(), String> {
    const RANKS: [&str; 13] = [
        "A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K",
    ];
    const SUITS: [char; 4] = ['♠', '♥', '♦', '♣'];

    let full: HashSet<String> = SUITS
        .iter()
        .flat_map(|suit| RANKS.iter().map(move |rank| format!("{}{}", rank, suit)))
        .collect();
    let dealt: HashSet<&String> = cards.iter().collect();

    if cards.len() != full.len() || dealt.len() != cards.len() {
        return Err(format!("expected 52 distinct cards, got {}", cards.len()));
    }
    match cards.iter().find(|c| !full.contains(*c)) {
        Some(card) => Err(format!("'{}' is not a playing card", card)),
        None => Ok(()),
    }
}

fn modpow(base: u64, exp: u64, modulus: u64) -> u64 {
    let m = modulus as u128;
    let (mut result, mut b, mut e) = (1u128 % m, base as u128 % m, exp);
    while e > 0 {
        if e & 1 == 1 {
            result = result * b % m;
        }
        b = b * b % m;
        e >>= 1;
    }
    result as u64
}

fn rsa(message: &str, t: &RsaTranscript) -> Result<(), String> {
    let (e, n) = t.public_key;
    let (d, n2) = t.private_key;
    if n != n2 {
        return Err(format!("keys disagree on the modulus: {} vs {}", n, n2));
    }
    if n <= 255 {
        return Err(format!("modulus {} too small for byte-wise encryption", n));
    }
    let bytes = message.as_bytes();
    if t.cipher.len() != bytes.len() {
        return Err(format!(
            "expected {} cipher values, got {}",
            bytes.len(),
            t.cipher.len()
        ));
    }
    for (i, (&byte, &c)) in bytes.iter().zip(&t.cipher).enumerate() {
        if modpow(byte as u64, e, n) != c {
            return Err(format!("cipher value {} is not byte {} under (e, n)", i, byte));
        }
        if modpow(c, d, n) != byte as u64 {
            return Err(format!("cipher value {} does not decrypt under (d, n)", i));
        }
    }
    if t.decrypted != message {
        return Err(format!("decrypted {:?}, expected {:?}", t.decrypted, message));
    }
    Ok(())
}

fn encrypted(message: &str, (e, n): (u64, u64), cipher: &[u64]) -> Result<(), String> {
    let bytes = message.as_bytes();
    if cipher.len() != bytes.len() {
        return Err(format!(
            "expected {} cipher values, got {}",
            bytes.len(),
            cipher.len()
        ));
    }
    match bytes
        .iter()
        .zip(cipher)
        .position(|(&byte, &c)| modpow(byte as u64, e, n) != c)
    {
        Some(i) => Err(format!("cipher value {} is not byte {} under (e, n)", i, bytes[i])),
        None => Ok(()),
    }
}

fn decrypted(cipher: &[u64], (d, n): (u64, u64), text: &str) -> Result<(), String> {
    let expected: Vec<u64> = cipher.iter().map(|&c| modpow(c, d, n)).collect();
    let actual: Vec<u64> = text.bytes().map(u64::from).collect();
    if expected == actual {
        Ok(())
    } else {
        Err(format!("cipher decrypts to bytes {:?}, got {:?}", expected, actual))
    }
}
