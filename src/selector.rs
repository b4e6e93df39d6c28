use crate::{
    Sha256, SignatureOracle, Transaction, TransactionValidator, UtxoId, UtxoPool,
};
use rayon::prelude::*;
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::debug;

/// Tunables for the batch selector.
///
/// Components at or below `exact_search_limit` transactions are solved
/// exactly; larger ones fall back to the greedy heuristic. `node_budget`
/// caps the number of states the exact search may expand per component
/// before it, too, falls back to greedy. Neither bound affects correctness,
/// only how often the selector settles for the heuristic answer.
#[derive(Debug, Clone, Copy)]
pub struct SelectorConfig {
    pub exact_search_limit: usize,
    pub node_budget: u64,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            exact_search_limit: 16,
            node_budget: 250_000,
        }
    }
}

/// The outcome of one selection run: the accepted transactions in an order
/// they can be applied, the pool that results from applying them, and the
/// total fee they collect. The pool passed to `select` is never mutated.
#[derive(Debug)]
pub struct Selection {
    pub accepted: Vec<Transaction>,
    pub pool: UtxoPool,
    pub total_fee: i64,
}

/// Assembles, from an unordered batch of candidates, the mutually
/// consistent subset that maximizes total fees.
///
/// Candidates are grouped into components over shared UTXO references
/// (conflicts and dependencies alike), so components touch disjoint pool
/// keys and are optimized independently and in parallel. Small components
/// get an exact branch-and-bound search; large ones the documented greedy
/// fallback: repeatedly accept the highest-fee transaction still valid
/// against the working pool. Equal fees prefer the lower transaction
/// digest, which makes the result reproducible across runs.
pub struct BatchSelector<'a> {
    oracle: &'a dyn SignatureOracle,
    config: SelectorConfig,
}

/// A candidate that survived screening, with its fee fixed by the amounts
/// its inputs resolve to.
struct Survivor {
    tx: Transaction,
    fee: i64,
}

/// The accepted member indices of one component, in application order.
struct ComponentSolution {
    order: Vec<usize>,
    fee: i64,
}

impl<'a> BatchSelector<'a> {
    pub fn new(oracle: &'a dyn SignatureOracle) -> Self {
        Self::with_config(oracle, SelectorConfig::default())
    }

    pub fn with_config(oracle: &'a dyn SignatureOracle, config: SelectorConfig) -> Self {
        Self { oracle, config }
    }

    /// Computes the fee-maximizing mutually compatible subset of
    /// `candidates` and the pool state its application implies.
    ///
    /// Invalid, conflicting, or malformed candidates are simply excluded;
    /// the selector never fails for a batch, and an unselectable batch
    /// yields an empty accepted sequence over an unchanged pool snapshot.
    pub fn select(&self, candidates: &[Transaction], pool: &UtxoPool) -> Selection {
        let survivors = self.screen(candidates, pool);
        let components = partition_components(&survivors);
        debug!(
            candidates = candidates.len(),
            survivors = survivors.len(),
            components = components.len(),
            "partitioned batch"
        );

        // Components touch disjoint UTXO keys, so they can be solved in
        // parallel and combined by concatenation.
        let solutions = components
            .par_iter()
            .map(|members| self.solve_component(members, &survivors, pool))
            .collect::<Vec<ComponentSolution>>();

        let mut accepted = Vec::new();
        let mut final_pool = pool.clone();
        let mut total_fee = 0;
        for solution in solutions {
            for index in solution.order {
                let survivor = &survivors[index];
                debug!(tx = %survivor.tx.id(), fee = survivor.fee, "accepted");
                final_pool.apply(&survivor.tx);
                accepted.push(survivor.tx.clone());
            }
            total_fee += solution.fee;
        }

        Selection {
            accepted,
            pool: final_pool,
            total_fee,
        }
    }

    /// Discards candidates that can never be valid in any application
    /// order, and fixes each survivor's fee.
    ///
    /// Screening validates each candidate against the resolution pool: the
    /// initial pool plus every output any candidate produces. A candidate
    /// that fails there (unknown UTXO everywhere, bad signature, internal
    /// double claim, negative output, value imbalance) fails no matter
    /// which subset of the batch is accepted first. Survivors are held in
    /// ascending digest order, which every later stage inherits.
    fn screen(&self, candidates: &[Transaction], pool: &UtxoPool) -> Vec<Survivor> {
        let mut unique: BTreeMap<Sha256, &Transaction> = BTreeMap::new();
        for tx in candidates {
            unique.entry(*tx.id()).or_insert(tx);
        }

        let mut resolution_pool = pool.clone();
        for tx in unique.values() {
            for (index, output) in tx.outputs().iter().enumerate() {
                let utxo_id = tx.output_utxo_id(index as u32);
                if !resolution_pool.contains(&utxo_id) {
                    resolution_pool.add(utxo_id, *output);
                }
            }
        }

        let mut survivors = Vec::with_capacity(unique.len());
        for tx in unique.values() {
            match TransactionValidator::validate(tx, &resolution_pool, self.oracle) {
                Ok(validated) => survivors.push(Survivor {
                    tx: (*tx).clone(),
                    fee: validated.fee,
                }),
                Err(error) if error.is_validity() => {
                    debug!(tx = %tx.id(), %error, "candidate can never be valid");
                }
                Err(error) => {
                    debug!(tx = %tx.id(), %error, "candidate cannot be evaluated");
                }
            }
        }
        survivors
    }

    fn solve_component(
        &self,
        members: &[usize],
        survivors: &[Survivor],
        pool: &UtxoPool,
    ) -> ComponentSolution {
        // Bitmask states cap the exact search at 63 members regardless of
        // the configured limit.
        if members.len() <= self.config.exact_search_limit.min(63) {
            let mut search = ExactSearch {
                members,
                survivors,
                node_budget: self.config.node_budget,
                nodes_expanded: 0,
                visited: HashSet::new(),
                best_fee: 0,
                best_order: Vec::new(),
            };
            let completed = search.run(pool);
            let exact = ComponentSolution {
                order: search
                    .best_order
                    .iter()
                    .map(|&position| members[position])
                    .collect(),
                fee: search.best_fee,
            };
            if completed {
                return exact;
            }
            debug!(
                members = members.len(),
                nodes = search.nodes_expanded,
                "exact search budget exhausted, falling back to greedy"
            );
            let greedy = self.solve_greedy(members, survivors, pool);
            if greedy.fee > exact.fee {
                return greedy;
            }
            return exact;
        }
        self.solve_greedy(members, survivors, pool)
    }

    /// The documented deterministic fallback: accept the highest-fee
    /// transaction still valid against the working pool, apply it, repeat.
    /// Not guaranteed optimal.
    fn solve_greedy(
        &self,
        members: &[usize],
        survivors: &[Survivor],
        pool: &UtxoPool,
    ) -> ComponentSolution {
        let mut working = pool.clone();
        let mut remaining = members.to_vec();
        let mut order = Vec::new();
        let mut total_fee = 0;
        loop {
            // Members are in ascending digest order, and a later candidate
            // replaces the pick only with a strictly higher fee, so equal
            // fees go to the lower digest.
            let mut pick: Option<usize> = None;
            for &index in &remaining {
                if !TransactionValidator::is_valid(&survivors[index].tx, &working, self.oracle) {
                    continue;
                }
                match pick {
                    Some(best) if survivors[index].fee <= survivors[best].fee => {}
                    _ => pick = Some(index),
                }
            }
            match pick {
                Some(index) => {
                    working.apply(&survivors[index].tx);
                    total_fee += survivors[index].fee;
                    order.push(index);
                    remaining.retain(|&other| other != index);
                }
                None => break,
            }
        }
        ComponentSolution {
            order,
            fee: total_fee,
        }
    }
}

/// Exact branch-and-bound over accepted-set bitmasks for one component.
///
/// A state is the set of accepted members; its pool is independent of the
/// order they were accepted in, so each mask is expanded at most once. The
/// search prunes states whose accumulated fee plus the sum of remaining
/// positive fees cannot beat the best found so far, and counts expansions
/// against the node budget.
struct ExactSearch<'a> {
    members: &'a [usize],
    survivors: &'a [Survivor],
    node_budget: u64,
    nodes_expanded: u64,
    visited: HashSet<u64>,
    best_fee: i64,
    /// Positions within `members`, in application order.
    best_order: Vec<usize>,
}

impl<'a> ExactSearch<'a> {
    /// Returns false if the node budget ran out before the search finished.
    fn run(&mut self, pool: &UtxoPool) -> bool {
        let mut order = Vec::new();
        self.expand(pool, 0, 0, &mut order)
    }

    fn expand(&mut self, pool: &UtxoPool, mask: u64, fee: i64, order: &mut Vec<usize>) -> bool {
        self.nodes_expanded += 1;
        if self.nodes_expanded > self.node_budget {
            return false;
        }

        // Among equal-fee answers prefer the one accepting more
        // transactions, so zero-fee dependents still make it in.
        if fee > self.best_fee || (fee == self.best_fee && order.len() > self.best_order.len()) {
            self.best_fee = fee;
            self.best_order = order.clone();
        }

        let mut optimistic = fee;
        for (position, &index) in self.members.iter().enumerate() {
            if mask & (1 << position) == 0 && self.survivors[index].fee > 0 {
                optimistic += self.survivors[index].fee;
            }
        }
        if optimistic < self.best_fee {
            return true;
        }

        for (position, &index) in self.members.iter().enumerate() {
            if mask & (1 << position) != 0 {
                continue;
            }
            let survivor = &self.survivors[index];
            // Intrinsic checks passed screening; applicability here reduces
            // to every claimed UTXO being present in the current pool.
            let applicable = survivor
                .tx
                .inputs()
                .iter()
                .all(|input| pool.contains(input.utxo_id()));
            if !applicable {
                continue;
            }
            let next_mask = mask | (1 << position);
            if !self.visited.insert(next_mask) {
                continue;
            }
            let mut next_pool = pool.clone();
            next_pool.apply(&survivor.tx);
            order.push(position);
            let completed = self.expand(&next_pool, next_mask, fee + survivor.fee, order);
            order.pop();
            if !completed {
                return false;
            }
        }
        true
    }
}

/// Groups survivors into connected components over shared UTXO references.
///
/// Two transactions land in the same component if any UTXO id appears in
/// both of their footprints (claimed inputs plus produced outputs). That
/// covers both conflicts and dependencies, so distinct components touch
/// disjoint pool keys. Components come out ordered by their lowest member
/// digest, members in ascending digest order.
fn partition_components(survivors: &[Survivor]) -> Vec<Vec<usize>> {
    let mut set = DisjointSet::new(survivors.len());
    let mut first_toucher: HashMap<UtxoId, usize> = HashMap::new();
    for (index, survivor) in survivors.iter().enumerate() {
        let claimed = survivor.tx.inputs().iter().map(|input| *input.utxo_id());
        let produced = survivor.tx.produced_utxo_ids();
        for utxo_id in claimed.chain(produced) {
            match first_toucher.get(&utxo_id) {
                Some(&other) => set.union(index, other),
                None => {
                    first_toucher.insert(utxo_id, index);
                }
            }
        }
    }

    let mut component_of_root: HashMap<usize, usize> = HashMap::new();
    let mut components: Vec<Vec<usize>> = Vec::new();
    for index in 0..survivors.len() {
        let root = set.find(index);
        let component = *component_of_root.entry(root).or_insert_with(|| {
            components.push(Vec::new());
            components.len() - 1
        });
        components[component].push(index);
    }
    components
}

/// Arena-indexed union-find with path halving.
struct DisjointSet {
    parent: Vec<usize>,
}

impl DisjointSet {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
        }
    }

    fn find(&mut self, mut node: usize) -> usize {
        while self.parent[node] != node {
            self.parent[node] = self.parent[self.parent[node]];
            node = self.parent[node];
        }
        node
    }

    fn union(&mut self, a: usize, b: usize) {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a != root_b {
            self.parent[root_a] = root_b;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::{Ed25519Oracle, Keypair};
    use crate::{signing_payload, TransactionInput, TransactionOutput};

    fn signed_transaction(
        spends: &[(UtxoId, &Keypair)],
        outputs: Vec<TransactionOutput>,
    ) -> Transaction {
        let spend_ids = spends.iter().map(|(id, _)| *id).collect::<Vec<UtxoId>>();
        let inputs = spends
            .iter()
            .enumerate()
            .map(|(slot, (id, keypair))| {
                let payload = signing_payload(slot as u32, &spend_ids, &outputs).unwrap();
                TransactionInput::new(*id, keypair.sign(&payload))
            })
            .collect();
        Transaction::new(inputs, outputs).unwrap()
    }

    fn keypair(seed: u8) -> Keypair {
        Keypair::from_seed([seed; 32])
    }

    fn genesis_utxo(tag: u8) -> UtxoId {
        UtxoId::new(Sha256::from_raw([tag; 32]), 0)
    }

    fn accepted_ids(selection: &Selection) -> Vec<Sha256> {
        selection.accepted.iter().map(|tx| *tx.id()).collect()
    }

    /// No two accepted transactions may claim the same UTXO.
    fn assert_conflict_free(selection: &Selection) {
        let mut claimed = HashSet::new();
        for tx in &selection.accepted {
            for input in tx.inputs() {
                assert!(
                    claimed.insert(*input.utxo_id()),
                    "two accepted transactions claim {}",
                    input.utxo_id()
                );
            }
        }
    }

    #[test]
    fn empty_batch_returns_unchanged_pool() {
        let owner = keypair(1);
        let mut pool = UtxoPool::new();
        pool.add(
            genesis_utxo(0xA1),
            TransactionOutput::new(10, owner.public_key()),
        );

        let selection = BatchSelector::new(&Ed25519Oracle).select(&[], &pool);
        assert!(selection.accepted.is_empty());
        assert_eq!(selection.total_fee, 0);
        assert_eq!(selection.pool.len(), 1);
        assert!(selection.pool.contains(&genesis_utxo(0xA1)));
    }

    #[test]
    fn conflict_on_shared_utxo_prefers_higher_fee() {
        let k1 = keypair(1);
        let k2 = keypair(2);
        let k3 = keypair(3);
        let u1 = genesis_utxo(0xA1);
        let mut pool = UtxoPool::new();
        pool.add(u1, TransactionOutput::new(10, k1.public_key()));

        // T1: fee 3. T2: fee 8, conflicts with T1 on U1.
        let t1 = signed_transaction(&[(u1, &k1)], vec![TransactionOutput::new(7, k2.public_key())]);
        let t2 = signed_transaction(&[(u1, &k1)], vec![TransactionOutput::new(2, k3.public_key())]);

        let selection =
            BatchSelector::new(&Ed25519Oracle).select(&[t1.clone(), t2.clone()], &pool);
        assert_eq!(accepted_ids(&selection), vec![*t2.id()]);
        assert_eq!(selection.total_fee, 8);
        assert!(!selection.pool.contains(&u1));
        assert!(selection.pool.contains(&t2.output_utxo_id(0)));
        assert!(!selection.pool.contains(&t1.output_utxo_id(0)));
    }

    #[test]
    fn dependency_chain_is_accepted_in_order() {
        let k1 = keypair(1);
        let k2 = keypair(2);
        let k4 = keypair(4);
        let u1 = genesis_utxo(0xA1);
        let mut pool = UtxoPool::new();
        pool.add(u1, TransactionOutput::new(10, k1.public_key()));

        // T3 spends the output T1 produces; zero fee.
        let t1 = signed_transaction(&[(u1, &k1)], vec![TransactionOutput::new(7, k2.public_key())]);
        let t3 = signed_transaction(
            &[(t1.output_utxo_id(0), &k2)],
            vec![TransactionOutput::new(7, k4.public_key())],
        );

        // Input order must not matter.
        let selection =
            BatchSelector::new(&Ed25519Oracle).select(&[t3.clone(), t1.clone()], &pool);
        // T1 must come first regardless of digest order or input order.
        assert_eq!(accepted_ids(&selection), vec![*t1.id(), *t3.id()]);
        assert_eq!(selection.total_fee, 3);
        assert!(!selection.pool.contains(&u1));
        assert!(!selection.pool.contains(&t1.output_utxo_id(0)));
        assert!(selection.pool.contains(&t3.output_utxo_id(0)));
    }

    #[test]
    fn batch_internal_conflict_resolved_by_fee() {
        let k1 = keypair(1);
        let k2 = keypair(2);
        let u1 = genesis_utxo(0xA1);
        let mut pool = UtxoPool::new();
        pool.add(u1, TransactionOutput::new(10, k1.public_key()));

        let producer =
            signed_transaction(&[(u1, &k1)], vec![TransactionOutput::new(9, k2.public_key())]);
        let spend_id = producer.output_utxo_id(0);
        // Two spenders of the same batch-internal output: fees 4 and 6.
        let cheap = signed_transaction(
            &[(spend_id, &k2)],
            vec![TransactionOutput::new(5, k1.public_key())],
        );
        let rich = signed_transaction(
            &[(spend_id, &k2)],
            vec![TransactionOutput::new(3, k1.public_key())],
        );

        let selection = BatchSelector::new(&Ed25519Oracle).select(
            &[cheap.clone(), rich.clone(), producer.clone()],
            &pool,
        );
        assert_conflict_free(&selection);
        assert_eq!(
            accepted_ids(&selection),
            vec![*producer.id(), *rich.id()]
        );
        assert_eq!(selection.total_fee, 1 + 6);
    }

    #[test]
    fn invalid_candidates_are_excluded_not_fatal() {
        let k1 = keypair(1);
        let k2 = keypair(2);
        let u1 = genesis_utxo(0xA1);
        let u2 = genesis_utxo(0xB2);
        let mut pool = UtxoPool::new();
        pool.add(u1, TransactionOutput::new(10, k1.public_key()));
        pool.add(u2, TransactionOutput::new(10, k1.public_key()));

        let valid =
            signed_transaction(&[(u1, &k1)], vec![TransactionOutput::new(7, k2.public_key())]);
        let unknown_utxo = signed_transaction(
            &[(genesis_utxo(0xC3), &k1)],
            vec![TransactionOutput::new(1, k2.public_key())],
        );
        let negative_output = signed_transaction(
            &[(u2, &k1)],
            vec![TransactionOutput::new(-1, k2.public_key())],
        );
        let wrong_signer =
            signed_transaction(&[(u2, &k2)], vec![TransactionOutput::new(1, k2.public_key())]);

        let selection = BatchSelector::new(&Ed25519Oracle).select(
            &[unknown_utxo, negative_output, wrong_signer, valid.clone()],
            &pool,
        );
        assert_eq!(accepted_ids(&selection), vec![*valid.id()]);
        assert_eq!(selection.total_fee, 3);
    }

    #[test]
    fn exact_search_beats_greedy_on_small_component() {
        let k1 = keypair(1);
        let k2 = keypair(2);
        let k3 = keypair(3);
        let u_a = genesis_utxo(0xA1);
        let u_b = genesis_utxo(0xB2);
        let mut pool = UtxoPool::new();
        pool.add(u_a, TransactionOutput::new(10, k1.public_key()));
        pool.add(u_b, TransactionOutput::new(10, k2.public_key()));

        // tx_big claims both UTXOs for fee 6 and starves the pair of fee-4
        // transactions worth 8 together.
        let tx_big = signed_transaction(
            &[(u_a, &k1), (u_b, &k2)],
            vec![TransactionOutput::new(14, k3.public_key())],
        );
        let tx_a = signed_transaction(
            &[(u_a, &k1)],
            vec![TransactionOutput::new(6, k3.public_key())],
        );
        let tx_b = signed_transaction(
            &[(u_b, &k2)],
            vec![TransactionOutput::new(6, k3.public_key())],
        );
        let batch = [tx_big.clone(), tx_a.clone(), tx_b.clone()];

        let exact = BatchSelector::new(&Ed25519Oracle).select(&batch, &pool);
        assert_conflict_free(&exact);
        assert_eq!(exact.total_fee, 8);
        let mut ids = accepted_ids(&exact);
        ids.sort();
        let mut expected = vec![*tx_a.id(), *tx_b.id()];
        expected.sort();
        assert_eq!(ids, expected);

        // Forcing the greedy path reproduces the documented heuristic pick.
        let greedy_config = SelectorConfig {
            exact_search_limit: 0,
            ..SelectorConfig::default()
        };
        let greedy =
            BatchSelector::with_config(&Ed25519Oracle, greedy_config).select(&batch, &pool);
        assert_eq!(accepted_ids(&greedy), vec![*tx_big.id()]);
        assert_eq!(greedy.total_fee, 6);
        assert!(exact.total_fee >= greedy.total_fee);
    }

    #[test]
    fn exhausted_node_budget_falls_back_to_greedy() {
        let k1 = keypair(1);
        let k2 = keypair(2);
        let k3 = keypair(3);
        let u_a = genesis_utxo(0xA1);
        let u_b = genesis_utxo(0xB2);
        let mut pool = UtxoPool::new();
        pool.add(u_a, TransactionOutput::new(10, k1.public_key()));
        pool.add(u_b, TransactionOutput::new(10, k2.public_key()));

        let tx_big = signed_transaction(
            &[(u_a, &k1), (u_b, &k2)],
            vec![TransactionOutput::new(14, k3.public_key())],
        );
        let tx_a = signed_transaction(
            &[(u_a, &k1)],
            vec![TransactionOutput::new(6, k3.public_key())],
        );
        let tx_b = signed_transaction(
            &[(u_b, &k2)],
            vec![TransactionOutput::new(6, k3.public_key())],
        );

        let config = SelectorConfig {
            exact_search_limit: 16,
            node_budget: 1,
        };
        let selection = BatchSelector::with_config(&Ed25519Oracle, config)
            .select(&[tx_big.clone(), tx_a, tx_b], &pool);
        assert_conflict_free(&selection);
        assert_eq!(accepted_ids(&selection), vec![*tx_big.id()]);
        assert_eq!(selection.total_fee, 6);
    }

    #[test]
    fn selection_is_deterministic_across_runs_and_input_orders() {
        let k1 = keypair(1);
        let k2 = keypair(2);
        let k3 = keypair(3);
        let mut pool = UtxoPool::new();
        let mut batch = Vec::new();
        for tag in 0..6u8 {
            let utxo_id = genesis_utxo(0x10 + tag);
            pool.add(utxo_id, TransactionOutput::new(10, k1.public_key()));
            // Two conflicting spenders per UTXO with different fees.
            batch.push(signed_transaction(
                &[(utxo_id, &k1)],
                vec![TransactionOutput::new(4 + tag as i64 % 3, k2.public_key())],
            ));
            batch.push(signed_transaction(
                &[(utxo_id, &k1)],
                vec![TransactionOutput::new(6, k3.public_key())],
            ));
        }

        let selector = BatchSelector::new(&Ed25519Oracle);
        let first = selector.select(&batch, &pool);
        let second = selector.select(&batch, &pool);
        let mut reversed = batch.clone();
        reversed.reverse();
        let third = selector.select(&reversed, &pool);

        assert_conflict_free(&first);
        assert_eq!(accepted_ids(&first), accepted_ids(&second));
        assert_eq!(accepted_ids(&first), accepted_ids(&third));
        assert_eq!(first.total_fee, third.total_fee);
    }

    #[test]
    fn equal_fee_conflict_prefers_lower_digest() {
        let k1 = keypair(1);
        let k2 = keypair(2);
        let k3 = keypair(3);
        let u1 = genesis_utxo(0xA1);
        let mut pool = UtxoPool::new();
        pool.add(u1, TransactionOutput::new(10, k1.public_key()));

        // Same fee, different recipients, so different digests.
        let first =
            signed_transaction(&[(u1, &k1)], vec![TransactionOutput::new(5, k2.public_key())]);
        let second =
            signed_transaction(&[(u1, &k1)], vec![TransactionOutput::new(5, k3.public_key())]);
        let winner = if first.id() < second.id() {
            *first.id()
        } else {
            *second.id()
        };

        let selection =
            BatchSelector::new(&Ed25519Oracle).select(&[first, second], &pool);
        assert_eq!(accepted_ids(&selection), vec![winner]);
        assert_eq!(selection.total_fee, 5);
    }

    #[test]
    fn duplicate_candidates_count_once() {
        let k1 = keypair(1);
        let k2 = keypair(2);
        let u1 = genesis_utxo(0xA1);
        let mut pool = UtxoPool::new();
        pool.add(u1, TransactionOutput::new(10, k1.public_key()));

        let tx =
            signed_transaction(&[(u1, &k1)], vec![TransactionOutput::new(7, k2.public_key())]);
        let selection =
            BatchSelector::new(&Ed25519Oracle).select(&[tx.clone(), tx.clone()], &pool);
        assert_eq!(accepted_ids(&selection), vec![*tx.id()]);
        assert_eq!(selection.total_fee, 3);
    }

    #[test]
    fn independent_components_all_contribute() {
        let owners = (1..=4u8).map(keypair).collect::<Vec<Keypair>>();
        let recipient = keypair(9);
        let mut pool = UtxoPool::new();
        let mut batch = Vec::new();
        for (tag, owner) in owners.iter().enumerate() {
            let utxo_id = genesis_utxo(0x20 + tag as u8);
            pool.add(utxo_id, TransactionOutput::new(10, owner.public_key()));
            batch.push(signed_transaction(
                &[(utxo_id, owner)],
                vec![TransactionOutput::new(8, recipient.public_key())],
            ));
        }

        let selection = BatchSelector::new(&Ed25519Oracle).select(&batch, &pool);
        assert_conflict_free(&selection);
        assert_eq!(selection.accepted.len(), 4);
        assert_eq!(selection.total_fee, 8);
        assert_eq!(selection.pool.len(), 4);
    }
}
