// This file is part of heap-vec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`HeapVec`](crate::HeapVec).
//!
//! - **Serialize**: as a sequence of elements (length `len`).
//! - **Deserialize**: from any sequence, pushing element by element into a
//!   vector built with `A::default()`.
//!
//! ### Trait bounds
//!
//! - `HeapVec<T, A>: Serialize` whenever `T: Serialize`.
//! - `HeapVec<T, A>: Deserialize` whenever `T: Deserialize<'de>` and
//!   `A: Allocator<T> + Default`.
//!
//! The sequence length hint is not trusted for pre-allocation; growth follows
//! `push`. An allocation failure surfaces as a custom deserializer error.

// Crate imports
use crate::{alloc_api::Allocator, vec::HeapVec};

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};

impl<T: Serialize, A: Allocator<T>> Serialize for HeapVec<T, A> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let sl = self.as_slice();
        let mut seq = s.serialize_seq(Some(sl.len()))?;
        for item in sl {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct VecVisitor<T, A>(PhantomData<(T, A)>);

impl<'de, T, A> de::Visitor<'de> for VecVisitor<T, A>
where
    T: Deserialize<'de>,
    A: Allocator<T> + Default,
{
    type Value = HeapVec<T, A>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence")
    }

    fn visit_seq<S: de::SeqAccess<'de>>(self, mut seq: S) -> Result<Self::Value, S::Error> {
        let mut out = HeapVec::<T, A>::new_in(A::default());
        while let Some(elem) = seq.next_element::<T>()? {
            out.push(elem).map_err(de::Error::custom)?;
        }
        Ok(out)
    }
}

impl<'de, T, A> Deserialize<'de> for HeapVec<T, A>
where
    T: Deserialize<'de>,
    A: Allocator<T> + Default,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(VecVisitor::<T, A>(PhantomData))
    }
}
