//! # Fast Fibonacci Library
//!
//! This library computes a single Fibonacci number in O(log n) time by raising the matrix
//! `[[1, 1], [1, 0]]` to the n-th power with square-and-multiply exponentiation. The matrix
//! entries are floating-point numbers, so very large indices produce an approximation instead
//! of requiring arbitrary-precision arithmetic.
//!
//! ## Key Features
//! - **Symmetric Matrix Arithmetic**: Every power of the base matrix is symmetric, so a matrix
//!   is stored as three scalars and squared or multiplied with fewer operations than a general
//!   2x2 product.
//! - **Binary Exponentiation**: The exponent is consumed one bit at a time, least significant
//!   first, squaring a running power-of-two matrix and multiplying it into an accumulator when
//!   the bit is set.
//! - **Explicit Precision**: The floating-point width is a configuration value passed to the
//!   computation, together with the limits up to which its results are exact or finite.
//!
//! ## Overview of Modules
//!
//! ### `math`
//! - `Scalar`: the arithmetic an entry needs, implemented for `f32`, `f64` and the
//!   double-double `twofloat::TwoFloat`.
//! - `Matrix`: a power of the base matrix. Its entries can only be produced by the operations
//!   below, which keeps the three-entry product valid.
//! - `matrix_square`, `matrix_mult`, `matrix_pow_from`, `matrix_pow`.
//!
//! ### `fibonacci`
//! - `fibonacci`: F(n) for an unsigned index at a chosen float type.
//! - `fibonacci_signed`: rejects negative indices with `FibonacciError::NegativeIndex`.
//! - `fibonacci_with`: F(n) at the precision named by a `Config`, reporting whether the
//!   result is exact.
//!
//! ### `config`
//! - `Precision`: single (`f32`), double (`f64`) or extended (double-double, the default)
//!   precision, with its mantissa width, exact limit and finite limit.
//! - `Config`: the settings of one computation.
//!
//! ## Precision Ceiling
//!
//! | Precision | Mantissa bits | Exact through | Finite through |
//! |-----------|---------------|---------------|----------------|
//! | single    | 24            | F(36)         | F(186)         |
//! | double    | 53            | F(78)         | F(1476)        |
//! | extended  | 106           | F(154)        | F(1476)        |
//!
//! ## Usage Example
//! ```rust
//! use fast_fibonacci::fibonacci::fibonacci;
//! let f = fibonacci::<f64>(90);
//! assert!((f - 2880067194370816120.0).abs() / f < 1e-12);
//! ```

pub mod config;
pub mod fibonacci;
pub mod math;
