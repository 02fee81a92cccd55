// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Mass units.
//!
//! Container weights are expressed in kilograms, while vessel limits are
//! configured in metric tonnes.

/// Kilograms per metric tonne.
pub const KILOGRAMS_PER_TONNE: f64 = 1000.0;

/// Converts metric tonnes to kilograms.
#[inline(always)]
pub fn tonnes_to_kilograms(tonnes: f64) -> f64 {
    tonnes * KILOGRAMS_PER_TONNE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tonnes_to_kilograms() {
        assert_eq!(tonnes_to_kilograms(0.0), 0.0);
        assert_eq!(tonnes_to_kilograms(1.0), 1000.0);
        assert_eq!(tonnes_to_kilograms(40000.0), 40_000_000.0);
    }
}
