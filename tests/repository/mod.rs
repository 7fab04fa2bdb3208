mod snapshot_invariants;
