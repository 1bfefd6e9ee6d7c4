// CART classifier for binary labels: gini impurity, axis-aligned thresholds,
// grown until every leaf is pure or cannot be split further.

#[derive(Debug, Clone, PartialEq)]
enum Node {
    Leaf(bool),
    Split {
        feature: usize,
        threshold: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

#[derive(Debug, Clone)]
pub struct DecisionTree {
    root: Node,
}

impl DecisionTree {
    pub fn fit(x: &[Vec<f64>], y: &[bool]) -> Self {
        let indices: Vec<usize> = (0..y.len()).collect();
        Self {
            root: build(x, y, indices),
        }
    }

    pub fn predict(&self, row: &[f64]) -> bool {
        let mut node = &self.root;
        loop {
            match node {
                Node::Leaf(label) => return *label,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    node = if row[*feature] <= *threshold { left } else { right };
                }
            }
        }
    }

    pub fn depth(&self) -> usize {
        fn depth(node: &Node) -> usize {
            match node {
                Node::Leaf(_) => 0,
                Node::Split { left, right, .. } => 1 + depth(left).max(depth(right)),
            }
        }
        depth(&self.root)
    }
}

fn gini(positives: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let p = positives as f64 / total as f64;
    1.0 - p * p - (1.0 - p) * (1.0 - p)
}

/// Majority label; ties go to `false`.
fn majority(y: &[bool], indices: &[usize]) -> bool {
    let positives = indices.iter().filter(|&&i| y[i]).count();
    positives * 2 > indices.len()
}

fn build(x: &[Vec<f64>], y: &[bool], indices: Vec<usize>) -> Node {
    let positives = indices.iter().filter(|&&i| y[i]).count();
    if positives == 0 || positives == indices.len() {
        return Node::Leaf(positives > 0);
    }

    let Some((feature, threshold)) = best_split(x, y, &indices) else {
        return Node::Leaf(majority(y, &indices));
    };

    let (left, right): (Vec<usize>, Vec<usize>) =
        indices.into_iter().partition(|&i| x[i][feature] <= threshold);

    Node::Split {
        feature,
        threshold,
        left: Box::new(build(x, y, left)),
        right: Box::new(build(x, y, right)),
    }
}

/// Threshold with the lowest weighted child impurity. Candidates are the
/// midpoints between consecutive distinct values of each feature.
fn best_split(x: &[Vec<f64>], y: &[bool], indices: &[usize]) -> Option<(usize, f64)> {
    let n_features = x.get(indices[0]).map_or(0, Vec::len);
    let total = indices.len();
    let mut best: Option<(f64, usize, f64)> = None;

    for feature in 0..n_features {
        let mut values: Vec<(f64, bool)> = indices.iter().map(|&i| (x[i][feature], y[i])).collect();
        values.sort_by(|a, b| a.0.total_cmp(&b.0));

        let all_positives = values.iter().filter(|v| v.1).count();
        let mut left_n = 0;
        let mut left_pos = 0;
        for pair in values.windows(2) {
            left_n += 1;
            if pair[0].1 {
                left_pos += 1;
            }
            if pair[0].0 == pair[1].0 {
                continue;
            }
            let right_n = total - left_n;
            let score = (left_n as f64 * gini(left_pos, left_n)
                + right_n as f64 * gini(all_positives - left_pos, right_n))
                / total as f64;
            if best.is_none_or(|(s, _, _)| score < s) {
                best = Some((score, feature, (pair[0].0 + pair[1].0) / 2.0));
            }
        }
    }

    best.map(|(_, feature, threshold)| (feature, threshold))
}
