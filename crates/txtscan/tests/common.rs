#![allow(missing_docs)]

// Sections are unindented headings; bodies are indented by two and may
// contain blank lines, deeper nesting and trailing whitespace.
pub const OUTLINE: &str = concat!(
    "Groceries\n",
    "  milk\n",
    "  eggs and\n",
    "    bacon\n",
    "\n",
    "Chores\n",
    "  laundry   \n",
    "\n",
    "  vacuum the\n",
    "\t\tstairs\n",
    " dust\n",
    "Notes ünïcödé\n",
    "  keep   receipts\n",
    "  for\ttaxes — 2024\n",
);
