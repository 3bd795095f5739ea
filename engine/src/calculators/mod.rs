// Financial calculators module.
//
// Each calculator is a pure, synchronous function from a typed input struct of
// already-parsed numbers to Option<ResultRecord>. The HTTP boundary parses the
// raw form text (shared::utils::brazilian_format) before calling in here, so
// the calculators never see strings. None means "not computable": a required
// input was non-finite or a structural precondition failed. No calculator ever
// returns a partial record or raises an error.

pub mod interest;
pub mod livestock;
pub mod loan;
pub mod payroll;
