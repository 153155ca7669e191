mod lookup;
mod untranslated;
