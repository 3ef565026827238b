/*!
The procedures of a solve.

The algorithm for determining satisfiability is factored into two procedures:

- [resolution], which derives every resolvent of a pair of clauses.
- [solve](crate::procedures::solve), which drives resolution over the formula of a context until the question of satisfiability is settled, or the step limit is reached.
*/

pub mod resolution;
pub mod solve;
