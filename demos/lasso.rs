use lassocd::estimators::Lasso;
use lassocd::helpers::helpers::compute_alpha_max;
use lassocd::helpers::test_helpers::generate_random_data;

fn main() {
    let (x, y) = generate_random_data(100, 30);

    let alpha_max = compute_alpha_max(x.view(), y.view());
    let alpha = alpha_max * 0.1;

    let mut model = Lasso::params()
        .alpha(alpha)
        .tolerance(1e-6)
        .verbose(true)
        .build()
        .unwrap();

    let fitted = model.fit(x.view(), y.view()).unwrap();
    let n_nonzero = fitted
        .coefficients()
        .iter()
        .filter(|&&wj| wj != 0.)
        .count();
    println!(
        "converged: {} after {} passes, {} / 30 features selected",
        fitted.termination().is_converged(),
        fitted.n_passes(),
        n_nonzero
    );

    let r2 = model.score(x.view(), y.view()).unwrap();
    println!("train r2: {}", r2);
}
