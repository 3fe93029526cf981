use regresslab_domain::{CodeBlock, CodeExercise, CodeStep, ExerciseId};

fn step(title: &str, explanation: &str, code: &str) -> CodeStep {
    CodeStep {
        title: title.to_string(),
        explanation: explanation.to_string(),
        code: code.to_string(),
    }
}

fn exercise(
    id: &str,
    title: &str,
    steps: Vec<CodeStep>,
    blocks: Vec<CodeBlock>,
    playground_code: &str,
) -> CodeExercise {
    // Blocks are authored in their correct order.
    let correct_order = blocks.iter().map(|b| b.id.clone()).collect();
    CodeExercise {
        id: ExerciseId::new(id),
        title: title.to_string(),
        steps,
        blocks,
        correct_order,
        playground_code: playground_code.to_string(),
    }
}

pub(super) fn all() -> Vec<CodeExercise> {
    vec![
        exercise(
            "first-regression",
            "Fit Your First Line",
            vec![
                step(
                    "The data",
                    "Start with a handful of points: hours studied and exam scores.",
                    "xs = [1, 2, 3, 4, 5]\nys = [52, 57, 61, 68, 72]",
                ),
                step(
                    "Means",
                    "Least squares for one feature only needs the means of x and y.",
                    "mean_x = sum(xs) / len(xs)\nmean_y = sum(ys) / len(ys)",
                ),
                step(
                    "Slope and intercept",
                    "The slope is covariance over variance; the intercept puts the line \
                     through the point of means.",
                    "slope = cov / var\nintercept = mean_y - slope * mean_x",
                ),
                step(
                    "Predict",
                    "With the line in hand, predicting is one multiplication and one addition.",
                    "print(slope * 6 + intercept)",
                ),
            ],
            vec![
                CodeBlock::new("data", "Load the data", "xs = [1, 2, 3, 4, 5]\nys = [52, 57, 61, 68, 72]"),
                CodeBlock::new(
                    "means",
                    "Compute the means",
                    "mean_x = sum(xs) / len(xs)\nmean_y = sum(ys) / len(ys)",
                ),
                CodeBlock::new(
                    "slope",
                    "Compute the slope",
                    "cov = sum((x - mean_x) * (y - mean_y) for x, y in zip(xs, ys))\n\
                     var = sum((x - mean_x) ** 2 for x in xs)\nslope = cov / var",
                ),
                CodeBlock::new("intercept", "Compute the intercept", "intercept = mean_y - slope * mean_x"),
                CodeBlock::new("predict", "Predict a new point", "print(slope * 6 + intercept)"),
            ],
            "xs = [1, 2, 3, 4, 5]\n\
             ys = [52, 57, 61, 68, 72]\n\
             mean_x = sum(xs) / len(xs)\n\
             mean_y = sum(ys) / len(ys)\n\
             cov = sum((x - mean_x) * (y - mean_y) for x, y in zip(xs, ys))\n\
             var = sum((x - mean_x) ** 2 for x in xs)\n\
             slope = cov / var\n\
             intercept = mean_y - slope * mean_x\n\
             print(f\"slope={slope:.2f} intercept={intercept:.2f}\")\n\
             print(f\"prediction for 6 hours: {slope * 6 + intercept:.1f}\")\n",
        ),
        exercise(
            "gradient-descent",
            "Walk Downhill",
            vec![
                step(
                    "Start somewhere",
                    "Gradient descent starts from an arbitrary guess for the parameters.",
                    "w, b = 0.0, 0.0",
                ),
                step(
                    "Measure the slope of the loss",
                    "The gradient of mean squared error tells us which way is uphill.",
                    "grad_w = -2 * sum((y - (w * x + b)) * x for x, y in data) / n",
                ),
                step(
                    "Take a step",
                    "Move each parameter a little against its gradient.",
                    "w -= lr * grad_w\nb -= lr * grad_b",
                ),
            ],
            vec![
                CodeBlock::new("data", "Load the data", "data = [(1, 3), (2, 5), (3, 7), (4, 9)]\nn = len(data)"),
                CodeBlock::new("init", "Initialise parameters", "w, b, lr = 0.0, 0.0, 0.05"),
                CodeBlock::new("loop", "Start the training loop", "for epoch in range(500):"),
                CodeBlock::new(
                    "gradients",
                    "Compute gradients",
                    "    grad_w = -2 * sum((y - (w * x + b)) * x for x, y in data) / n\n\
                     \x20   grad_b = -2 * sum((y - (w * x + b)) for x, y in data) / n",
                ),
                CodeBlock::new("update", "Update parameters", "    w -= lr * grad_w\n    b -= lr * grad_b"),
                CodeBlock::new("report", "Report the fit", "print(w, b)"),
            ],
            "data = [(1, 3), (2, 5), (3, 7), (4, 9)]\n\
             n = len(data)\n\
             w, b, lr = 0.0, 0.0, 0.05\n\
             for epoch in range(500):\n\
             \x20   grad_w = -2 * sum((y - (w * x + b)) * x for x, y in data) / n\n\
             \x20   grad_b = -2 * sum((y - (w * x + b)) for x, y in data) / n\n\
             \x20   w -= lr * grad_w\n\
             \x20   b -= lr * grad_b\n\
             \x20   if epoch % 100 == 0:\n\
             \x20       loss = sum((y - (w * x + b)) ** 2 for x, y in data) / n\n\
             \x20       print(f\"epoch {epoch}: loss={loss:.4f}\")\n\
             print(f\"w={w:.3f} b={b:.3f}\")\n",
        ),
        exercise(
            "ridge-by-hand",
            "Ridge by Hand",
            vec![
                step(
                    "The closed form",
                    "For one centred feature, ridge divides the covariance by the variance \
                     plus lambda.",
                    "slope = cov / (var + lam)",
                ),
                step(
                    "Compare lambdas",
                    "Larger lambda shrinks the slope toward zero.",
                    "for lam in [0, 1, 10, 100]:\n    print(lam, ridge_slope(lam))",
                ),
            ],
            vec![
                CodeBlock::new("data", "Load the data", "xs = [1, 2, 3, 4, 5]\nys = [2.1, 3.9, 6.2, 7.8, 10.1]"),
                CodeBlock::new(
                    "centre",
                    "Centre the data",
                    "mx, my = sum(xs) / len(xs), sum(ys) / len(ys)",
                ),
                CodeBlock::new(
                    "define",
                    "Define the ridge slope",
                    "def ridge_slope(lam):\n\
                     \x20   cov = sum((x - mx) * (y - my) for x, y in zip(xs, ys))\n\
                     \x20   var = sum((x - mx) ** 2 for x in xs)\n\
                     \x20   return cov / (var + lam)",
                ),
                CodeBlock::new(
                    "sweep",
                    "Sweep lambda",
                    "for lam in [0, 1, 10, 100]:\n    print(lam, ridge_slope(lam))",
                ),
            ],
            "xs = [1, 2, 3, 4, 5]\n\
             ys = [2.1, 3.9, 6.2, 7.8, 10.1]\n\
             mx, my = sum(xs) / len(xs), sum(ys) / len(ys)\n\
             \n\
             def ridge_slope(lam):\n\
             \x20   cov = sum((x - mx) * (y - my) for x, y in zip(xs, ys))\n\
             \x20   var = sum((x - mx) ** 2 for x in xs)\n\
             \x20   return cov / (var + lam)\n\
             \n\
             for lam in [0, 1, 10, 100]:\n\
             \x20   print(f\"lambda={lam:>3}: slope={ridge_slope(lam):.3f}\")\n",
        ),
        exercise(
            "k-fold",
            "K-Fold by Hand",
            vec![
                step(
                    "Make folds",
                    "Deal the row indices into k roughly equal folds.",
                    "folds = [idx[i::k] for i in range(k)]",
                ),
                step(
                    "Hold one out",
                    "Each round trains on every fold except one and scores on the held-out fold.",
                    "train = [i for f in folds if f is not held for i in f]",
                ),
                step(
                    "Average",
                    "The cross-validation score is the mean of the k fold scores.",
                    "print(sum(scores) / k)",
                ),
            ],
            vec![
                CodeBlock::new(
                    "data",
                    "Load the data",
                    "xs = list(range(10))\nys = [2 * x + 1 + (x % 3) for x in xs]\nk = 5",
                ),
                CodeBlock::new("folds", "Build the folds", "folds = [list(range(10))[i::k] for i in range(k)]"),
                CodeBlock::new(
                    "loop",
                    "Loop over held-out folds",
                    "scores = []\nfor held in folds:\n    train = [i for i in range(10) if i not in held]",
                ),
                CodeBlock::new(
                    "fit",
                    "Fit on the training folds",
                    "    mx = sum(xs[i] for i in train) / len(train)\n\
                     \x20   my = sum(ys[i] for i in train) / len(train)\n\
                     \x20   slope = sum((xs[i] - mx) * (ys[i] - my) for i in train) / sum((xs[i] - mx) ** 2 for i in train)",
                ),
                CodeBlock::new(
                    "score",
                    "Score the held-out fold",
                    "    mse = sum((ys[i] - (my + slope * (xs[i] - mx))) ** 2 for i in held) / len(held)\n\
                     \x20   scores.append(mse)",
                ),
                CodeBlock::new("average", "Average the scores", "print(sum(scores) / k)"),
            ],
            "xs = list(range(10))\n\
             ys = [2 * x + 1 + (x % 3) for x in xs]\n\
             k = 5\n\
             folds = [list(range(10))[i::k] for i in range(k)]\n\
             scores = []\n\
             for held in folds:\n\
             \x20   train = [i for i in range(10) if i not in held]\n\
             \x20   mx = sum(xs[i] for i in train) / len(train)\n\
             \x20   my = sum(ys[i] for i in train) / len(train)\n\
             \x20   slope = sum((xs[i] - mx) * (ys[i] - my) for i in train) / sum((xs[i] - mx) ** 2 for i in train)\n\
             \x20   mse = sum((ys[i] - (my + slope * (xs[i] - mx))) ** 2 for i in held) / len(held)\n\
             \x20   scores.append(mse)\n\
             \x20   print(f\"held out {held}: mse={mse:.3f}\")\n\
             print(f\"cv mse={sum(scores) / k:.3f}\")\n",
        ),
    ]
}
