use denmat::Matrix;
use rand::Rng;

fn main() {
    let n = 4;
    // build a random diagonally dominant matrix, guaranteed invertible
    let mut rng = rand::thread_rng();
    let mut a = Matrix::<f64>::zeros(n, n);
    for r in 0..n {
        for c in 0..n {
            a[(r, c)] = rng.r#gen::<f64>();
        }
        a[(r, r)] = a[(r, r)] + n as f64;
    }

    let det = a.determinant().unwrap();
    let inv = a.inverse().unwrap();

    // residual of the round trip, should sit at machine-noise level
    let mut residual = &a * &inv;
    residual.sub(&Matrix::identity(n)).unwrap();
    let worst = residual
        .as_slice()
        .iter()
        .fold(0.0f64, |acc, x| acc.max(x.abs()));

    println!("A = {a}");
    println!("det(A) = {det:.6}");
    println!("A^-1 = {inv}");
    println!("max |A * A^-1 - I| = {worst:e}");
}
