use crate::engine::*;

impl Worker {
    /// Runs one search from `root`, which must have ply 0 and be maximizing.
    pub fn go(&mut self, root: &Position) -> (Option<Divisor>, Score) {
        debug_assert_eq!(root.ply, 0);
        debug_assert!(root.maximizing);
        self.nodes = 0;
        self.root_move = None;

        if root.is_terminal() {
            // nothing to search; report how the game stands
            return (None, (self.eval_fn)(root, self.searcher));
        }
        let moves = root.legal_moves();
        if moves.is_empty() {
            return (None, SCORE_NEG_INF);
        }

        let score = self.value(root, 0, SCORE_NEG_INF, SCORE_POS_INF);

        // every child scored -inf: no strict improvement was recorded
        let mut fallback = moves;
        let best = self.root_move.or_else(|| fallback.next());
        return (best, score);
    }

    // minimax over the division tree, pruned when the algorithm asks for it.
    // Strict comparisons keep the first of equally scored children.
    fn value(&mut self, pos: &Position, depth: u32, mut alpha: Score, mut beta: Score) -> Score {
        self.nodes += 1;
        debug_assert_eq!(pos.maximizing, maximizing_at(pos.ply, true));

        if pos.is_terminal() || depth >= self.config.max_depth {
            return (self.eval_fn)(pos, self.searcher);
        }

        let mover = mover_identity(pos.ply, self.searcher);
        let children = pos.expand(mover);
        if children.is_empty() {
            // the side to move here is stuck and loses
            return if pos.maximizing {
                SCORE_NEG_INF
            } else {
                SCORE_POS_INF
            };
        }

        let prune = self.config.algorithm.prunes();
        let mut best_move = None;
        let mut best;

        if pos.maximizing {
            best = SCORE_NEG_INF;
            for (d, child) in children.iter() {
                debug_assert!(child.number < pos.number);
                let score = self.value(child, depth + 1, alpha, beta);
                if score > best {
                    best = score;
                    best_move = Some(*d);
                }
                if prune {
                    alpha = alpha.max(best);
                    if beta <= alpha {
                        break;
                    }
                }
            }
        } else {
            best = SCORE_POS_INF;
            for (d, child) in children.iter() {
                debug_assert!(child.number < pos.number);
                let score = self.value(child, depth + 1, alpha, beta);
                // the opponent's most threatening reply; only kept at the root
                if score < best {
                    best = score;
                    best_move = Some(*d);
                }
                if prune {
                    beta = beta.min(best);
                    if beta <= alpha {
                        break;
                    }
                }
            }
        }

        if depth == 0 {
            self.root_move = best_move;
        }
        return best;
    }
}
