//! Bending moments.

quantity!(FootPounds, "ft·lb", 0);
