/*!
# Graph Algorithms

Depth-first path search and the traversal trait exposing it on graphs.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use dfpaths::algo::*;
```
*/

mod depth_first_paths;
mod traversal;

use crate::{error::*, prelude::*};

pub use depth_first_paths::*;
pub use traversal::*;
