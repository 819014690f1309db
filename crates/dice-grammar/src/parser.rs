//! All-parses recursive parser with number agreement
//!
//! Every nonterminal is parsed over an exact span of the tagged input and
//! yields every tree for that span together with its number feature. Spans
//! shrink on every recursive step except the unit productions
//! `QP -> VP`, `NP -> Nom` and `Nom -> AN`, none of which loop back.

use crate::lexicon::Lexicon;
use crate::tagging::{tag_words, Tag};
use crate::tree::{An, Category, Nom, Np, Number, Qp, Rel, Vp, Word, S};

/// Every syntax tree for `words` under `lexicon`
///
/// The last word must be `?`. An empty result means the sentence is not
/// in the grammar; more than one result means it is ambiguous.
pub fn parse_sentence(words: &[&str], lexicon: &Lexicon) -> Vec<S> {
    let parser = Parser {
        tags: tag_words(words, lexicon),
    };
    let trees = parser.sentences();
    tracing::debug!(words = words.len(), parses = trees.len(), "parsed sentence");
    trees
}

struct Parser {
    tags: Vec<Vec<Tag>>,
}

impl Parser {
    fn len(&self) -> usize {
        self.tags.len()
    }

    /// Readings of the word at `i` in `category`
    fn leaves(&self, i: usize, category: Category) -> impl Iterator<Item = &Tag> {
        self.tags
            .get(i)
            .into_iter()
            .flatten()
            .filter(move |tag| tag.category == category)
    }

    /// Content-word readings paired with their number
    fn numbered(&self, i: usize, category: Category) -> impl Iterator<Item = (&Word, Number)> {
        self.leaves(i, category)
            .filter_map(|tag| tag.number.map(|n| (&tag.word, n)))
    }

    fn is(&self, i: usize, category: Category) -> bool {
        self.leaves(i, category).next().is_some()
    }

    /// Number of the function word at `i`, if it is `category`
    fn function_number(&self, i: usize, category: Category) -> Option<Number> {
        self.leaves(i, category).find_map(|tag| tag.number)
    }

    fn sentences(&self) -> Vec<S> {
        let n = self.len();
        let mut trees = Vec::new();
        if n < 3 || !self.is(n - 1, Category::Qm) {
            return trees;
        }
        let end = n - 1;

        if self.is(0, Category::Who) {
            for (qp, number) in self.qp(1, end) {
                if number == Number::Singular {
                    trees.push(S::Who(qp));
                }
            }
        }

        if self.is(0, Category::Which) {
            for k in 2..end {
                for (nom, nom_number) in self.nom(1, k) {
                    for (qp, qp_number) in self.qp(k, end) {
                        if nom_number == qp_number {
                            trees.push(S::Which(nom.clone(), qp));
                        }
                    }
                }
            }
        }

        trees
    }

    fn qp(&self, i: usize, j: usize) -> Vec<(Qp, Number)> {
        let mut out: Vec<_> = self
            .vp(i, j)
            .into_iter()
            .map(|(vp, n)| (Qp::Vp(vp), n))
            .collect();

        // QP[n] -> DO[n] NP[n] T[p]
        if j >= i + 3 {
            if let Some(number) = self.function_number(i, Category::Do) {
                for (t, t_number) in self.numbered(j - 1, Category::T) {
                    if t_number != Number::Plural {
                        continue;
                    }
                    for (np, np_number) in self.np(i + 1, j - 1) {
                        if np_number == number {
                            out.push((Qp::Do(np, t.clone()), number));
                        }
                    }
                }
            }
        }
        out
    }

    fn vp(&self, i: usize, j: usize) -> Vec<(Vp, Number)> {
        let mut out = Vec::new();
        if j <= i {
            return out;
        }

        if j == i + 1 {
            for (word, n) in self.numbered(i, Category::I) {
                out.push((Vp::Intransitive(word.clone()), n));
            }
        }

        // VP[n] -> T[n] NP
        if j >= i + 2 {
            for (t, n) in self.numbered(i, Category::T) {
                for (np, _) in self.np(i + 1, j) {
                    out.push((Vp::Transitive(t.clone(), np), n));
                }
            }
        }

        if let Some(n) = self.function_number(i, Category::Be) {
            if j == i + 2 {
                for tag in self.leaves(i + 1, Category::A) {
                    out.push((Vp::BeAdjective(tag.word.clone()), n));
                }
            }
            for (np, np_number) in self.np(i + 1, j) {
                if np_number == n {
                    out.push((Vp::BeNp(np), n));
                }
            }
        }

        // VP[n] -> VP[n] AND VP[n], every split point
        for k in i + 1..j.saturating_sub(1) {
            if !self.is(k, Category::And) {
                continue;
            }
            let right = self.vp(k + 1, j);
            for (left, left_number) in self.vp(i, k) {
                for (r, right_number) in &right {
                    if left_number == *right_number {
                        out.push((
                            Vp::Coordination(Box::new(left.clone()), Box::new(r.clone())),
                            left_number,
                        ));
                    }
                }
            }
        }
        out
    }

    fn np(&self, i: usize, j: usize) -> Vec<(Np, Number)> {
        let mut out = Vec::new();
        if j <= i {
            return out;
        }

        if j == i + 1 {
            for tag in self.leaves(i, Category::P) {
                out.push((Np::Name(tag.word.clone()), Number::Singular));
            }
        }

        if self.is(i, Category::Ar) {
            for (nom, n) in self.nom(i + 1, j) {
                if n == Number::Singular {
                    out.push((Np::Article(nom), n));
                }
            }
        }

        for (nom, n) in self.nom(i, j) {
            if n == Number::Plural {
                out.push((Np::Bare(nom), n));
            }
        }
        out
    }

    fn nom(&self, i: usize, j: usize) -> Vec<(Nom, Number)> {
        let mut out: Vec<_> = self
            .an(i, j)
            .into_iter()
            .map(|(an, n)| (Nom::Head(an), n))
            .collect();

        for k in i + 1..j {
            let relatives = self.rel(k, j);
            if relatives.is_empty() {
                continue;
            }
            for (an, n) in self.an(i, k) {
                for (rel, rel_number) in &relatives {
                    if rel_number.map_or(true, |r| r == n) {
                        out.push((Nom::Relative(an.clone(), Box::new(rel.clone())), n));
                    }
                }
            }
        }
        out
    }

    fn an(&self, i: usize, j: usize) -> Vec<(An, Number)> {
        let mut out = Vec::new();
        if j <= i {
            return out;
        }

        if j == i + 1 {
            for (word, n) in self.numbered(i, Category::N) {
                out.push((An::Noun(word.clone()), n));
            }
        } else {
            for tag in self.leaves(i, Category::A) {
                for (an, n) in self.an(i + 1, j) {
                    out.push((An::Adjective(tag.word.clone(), Box::new(an)), n));
                }
            }
        }
        out
    }

    /// Relative clauses; `None` where the clause leaves the noun's number free
    fn rel(&self, i: usize, j: usize) -> Vec<(Rel, Option<Number>)> {
        let mut out = Vec::new();
        if j < i + 2 {
            return out;
        }

        if self.is(i, Category::Who) {
            for (vp, n) in self.vp(i + 1, j) {
                out.push((Rel::Subject(vp), Some(n)));
            }
        }

        // Rel -> NP[m] T[m]
        for (t, t_number) in self.numbered(j - 1, Category::T) {
            for (np, np_number) in self.np(i, j - 1) {
                if np_number == t_number {
                    out.push((Rel::Object(np, t.clone()), None));
                }
            }
        }
        out
    }
}
