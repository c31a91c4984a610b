//! Todd-Coxeter coset enumeration.
//!
//! This is the Hasse–Lee–Trotter strategy: every live coset has each relator
//! scanned at it, filling gaps with new cosets, and then has any remaining
//! undefined entries defined. Coincidences are processed as described in
//! _Handbook of Computational Group Theory_ (Holt, Eick, O'Brien), §5.1.

use std::collections::VecDeque;

use wythoff_util::ti::TypedIndex;

use super::{
    CosetId, TransitionTable, EnumerationMode, GeneratorId, GroupError, GroupResult, PerCoset,
    Presentation, Word,
};

/// Bounds on a coset enumeration.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnumerationLimits {
    /// Maximum number of cosets that may be defined, including ones that are
    /// later found to coincide.
    pub max_cosets: usize,
}
impl Default for EnumerationLimits {
    fn default() -> Self {
        Self {
            max_cosets: 1 << 21,
        }
    }
}

/// Complete coset table: the action of a group on the cosets of a subgroup.
///
/// Cosets are numbered in shortlex order of their canonical words, so coset 0
/// is the subgroup itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CosetTable {
    table: TransitionTable<CosetId>,
    words: PerCoset<Word>,
}
impl CosetTable {
    /// Returns the number of cosets, which is the index of the subgroup.
    pub fn len(&self) -> usize {
        self.words.len()
    }
    /// Returns whether the table is empty, which never happens.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
    /// Returns an iterator over all cosets.
    pub fn cosets(&self) -> impl Iterator<Item = CosetId> + use<> {
        CosetId::iter(self.len())
    }

    /// Returns the coset reached by applying `generator` to `coset`.
    #[track_caller]
    pub fn transition(&self, coset: CosetId, generator: GeneratorId) -> CosetId {
        *self.table.get(coset, generator)
    }
    /// Returns the coset reached by applying each generator of `word` to
    /// `coset`, in order.
    #[track_caller]
    pub fn walk(&self, coset: CosetId, word: &Word) -> CosetId {
        word.iter().fold(coset, |c, g| self.transition(c, g))
    }

    /// Returns the shortest word leading from coset 0 to each coset, with ties
    /// broken lexicographically.
    pub fn canonical_words(&self) -> &PerCoset<Word> {
        &self.words
    }
    /// Returns the canonical word for a coset.
    #[track_caller]
    pub fn word(&self, coset: CosetId) -> &Word {
        &self.words[coset]
    }
}

/// Enumerates the cosets of the subgroup generated by `subgroup` in the group
/// given by `presentation`.
///
/// Enumeration fails with [`GroupError::CosetLimitExceeded`] rather than
/// running forever when the subgroup has infinite (or very large) index.
pub fn enumerate_cosets(
    presentation: &Presentation,
    subgroup: &[Word],
    limits: &EnumerationLimits,
) -> GroupResult<CosetTable> {
    for w in subgroup {
        presentation.validate_word(w)?;
    }
    let relators = presentation.all_relators();
    let mut b = CosetTableBuilder::new(presentation, limits);

    for w in subgroup {
        b.scan_and_fill(CosetId::BASE, w)?;
    }

    let mut coset_index = 0;
    while coset_index < b.table.element_count() {
        let c = CosetId::try_from_index(coset_index)?;
        for r in &relators {
            if !b.is_live(c) {
                break;
            }
            b.scan_and_fill(c, r)?;
        }
        if b.is_live(c) {
            for g in presentation.generators() {
                if b.table.get(c, g).is_none() {
                    b.define(c, g)?;
                }
            }
        }
        coset_index += 1;
    }

    let total = b.table.element_count();
    let table = b.compact()?;
    log::trace!(
        "enumerated {} cosets of {} subgroup generators using {} generators and {} relators \
         ({total} defined, {} coincident)",
        table.len(),
        subgroup.len(),
        presentation.generator_count(),
        relators.len(),
        total - table.len(),
    );
    Ok(table)
}

/// Coset table under construction.
struct CosetTableBuilder {
    mode: EnumerationMode,
    generator_count: u8,
    max_cosets: usize,

    /// Partial action of the generators on cosets.
    table: TransitionTable<Option<CosetId>>,
    /// Union-find forest for coincidences. A coset is live iff it is its own
    /// parent, and every coset points at a smaller-or-equal coset.
    parent: Vec<CosetId>,
}
impl CosetTableBuilder {
    fn new(presentation: &Presentation, limits: &EnumerationLimits) -> Self {
        let generator_count = presentation.generator_count();
        Self {
            mode: presentation.mode(),
            generator_count,
            max_cosets: limits.max_cosets,

            table: TransitionTable::new(generator_count as usize, None),
            parent: vec![CosetId::BASE],
        }
    }

    fn inverse(&self, g: GeneratorId) -> GeneratorId {
        match self.mode {
            EnumerationMode::Coxeter => g,
            EnumerationMode::Free => GeneratorId(g.0 ^ 1),
        }
    }
    fn generators(&self) -> impl Iterator<Item = GeneratorId> + use<> {
        (0..self.generator_count).map(GeneratorId)
    }

    fn is_live(&self, c: CosetId) -> bool {
        self.parent[c.to_index()] == c
    }

    /// Returns the live coset that `c` has been merged into, compressing paths
    /// along the way.
    fn rep(&mut self, c: CosetId) -> CosetId {
        let mut root = c;
        while self.parent[root.to_index()] != root {
            root = self.parent[root.to_index()];
        }
        let mut c = c;
        while c != root {
            let next = self.parent[c.to_index()];
            self.parent[c.to_index()] = root;
            c = next;
        }
        root
    }

    /// Sets `c*g = d` and `d*g⁻¹ = c`.
    fn set(&mut self, c: CosetId, g: GeneratorId, d: CosetId) {
        *self.table.get_mut(c, g) = Some(d);
        let g_inv = self.inverse(g);
        *self.table.get_mut(d, g_inv) = Some(c);
    }

    /// Defines a new coset `c*g`.
    fn define(&mut self, c: CosetId, g: GeneratorId) -> GroupResult<CosetId> {
        if self.table.element_count() >= self.max_cosets {
            return Err(GroupError::CosetLimitExceeded(self.max_cosets));
        }
        let d = self.table.add_element(None)?;
        self.parent.push(d);
        self.set(c, g, d);
        Ok(d)
    }

    /// Scans `word` at coset `c`, defining new cosets until the scan
    /// completes. A completed scan may produce a deduction or a coincidence.
    fn scan_and_fill(&mut self, c: CosetId, word: &Word) -> GroupResult<()> {
        let w: Vec<GeneratorId> = word.iter().collect();
        let mut f = c;
        let mut b = c;
        let mut i = 0;
        let mut j = w.len();
        loop {
            // Scan forwards.
            while i < j {
                match *self.table.get(f, w[i]) {
                    Some(next) => {
                        f = next;
                        i += 1;
                    }
                    None => break,
                }
            }
            if i == j {
                if f != b {
                    self.coincidence(f, b);
                }
                return Ok(());
            }

            // Scan backwards.
            while j > i {
                match *self.table.get(b, self.inverse(w[j - 1])) {
                    Some(next) => {
                        b = next;
                        j -= 1;
                    }
                    None => break,
                }
            }
            if j == i {
                self.coincidence(f, b);
                return Ok(());
            } else if j == i + 1 {
                // Deduction
                self.set(f, w[i], b);
                return Ok(());
            }

            f = self.define(f, w[i])?;
            i += 1;
        }
    }

    /// Merges the classes of `a` and `b`, queueing the coset that dies.
    fn merge(&mut self, a: CosetId, b: CosetId, queue: &mut VecDeque<CosetId>) {
        let a = self.rep(a);
        let b = self.rep(b);
        if a != b {
            let (keep, kill) = if a < b { (a, b) } else { (b, a) };
            self.parent[kill.to_index()] = keep;
            queue.push_back(kill);
        }
    }

    /// Processes the coincidence `a = b` and every coincidence it implies.
    fn coincidence(&mut self, a: CosetId, b: CosetId) {
        let mut queue = VecDeque::new();
        self.merge(a, b, &mut queue);
        while let Some(e) = queue.pop_front() {
            for x in self.generators() {
                let Some(f) = *self.table.get(e, x) else {
                    continue;
                };
                let x_inv = self.inverse(x);
                *self.table.get_mut(f, x_inv) = None;

                let e1 = self.rep(e);
                let f1 = self.rep(f);
                if let Some(t) = *self.table.get(e1, x) {
                    self.merge(f1, t, &mut queue);
                } else if let Some(t) = *self.table.get(f1, x_inv) {
                    self.merge(e1, t, &mut queue);
                } else {
                    self.set(e1, x, f1);
                }
            }
        }
    }

    /// Discards dead cosets and renumbers the rest in breadth-first order from
    /// coset 0, recording a canonical word for each.
    fn compact(mut self) -> GroupResult<CosetTable> {
        let old_count = self.table.element_count();
        let mut new_ids: Vec<Option<CosetId>> = vec![None; old_count];
        let mut order = vec![CosetId::BASE];
        let mut words: PerCoset<Word> = PerCoset::new();
        new_ids[0] = Some(words.push(Word::IDENTITY)?);

        let mut next = 0;
        while next < order.len() {
            let c = order[next];
            for g in self.generators() {
                let d = (*self.table.get(c, g)).ok_or(GroupError::IncompleteTable)?;
                let d = self.rep(d);
                if new_ids[d.to_index()].is_none() {
                    let word = words[new_ids[c.to_index()].ok_or(GroupError::IncompleteTable)?]
                        .then(&Word::new([g]));
                    new_ids[d.to_index()] = Some(words.push(word)?);
                    order.push(d);
                }
            }
            next += 1;
        }

        // Entries of live cosets only point at live cosets once coincidences
        // are processed, but resolve them anyway.
        let reps: Vec<CosetId> = (0..old_count)
            .map(|i| CosetId::try_from_index(i).map(|c| self.rep(c)))
            .collect::<Result<_, _>>()?;
        let table = self
            .table
            .remap_rows(&order, |entry| new_ids[reps[entry.as_ref()?.to_index()].to_index()])
            .ok_or(GroupError::IncompleteTable)?;

        Ok(CosetTable { table, words })
    }
}
