// Python track.
// Easy 1-7, medium 8-14, hard 15-20.
use super::LevelDef;

pub static PYTHON_LEVELS: [LevelDef; 20] = [
    LevelDef {
        id: 1,
        title: "Missing Colon",
        description: "Python requires a colon at the end of function definitions, if statements, loops, etc.",
        buggy_code: "def greet()\n    print(\"Hello\")",
        correct_code: "def greet():\n    print(\"Hello\")",
        hints: &[
            "Look at the function definition line",
            "Add a colon after the parentheses",
            "def greet():",
        ],
    },
    LevelDef {
        id: 2,
        title: "Wrong Indentation",
        description: "Python uses indentation to define code blocks. The print statement should be indented.",
        buggy_code: "def greet():\nprint(\"Hello\")",
        correct_code: "def greet():\n    print(\"Hello\")",
        hints: &[
            "Check the indentation of the print statement",
            "Add 4 spaces before print",
            "Code inside functions must be indented",
        ],
    },
    LevelDef {
        id: 3,
        title: "Missing Quotes",
        description: "String values must be wrapped in quotes. The name needs quotes around it.",
        buggy_code: "name = John",
        correct_code: "name = \"John\"",
        hints: &[
            "Strings need quotes around them",
            "Add quotes around John",
            "Use 'John' or \"John\"",
        ],
    },
    LevelDef {
        id: 4,
        title: "Wrong Print Syntax",
        description: "In Python 3, print is a function and requires parentheses.",
        buggy_code: "print \"Hello World\"",
        correct_code: "print(\"Hello World\")",
        hints: &[
            "print requires parentheses in Python 3",
            "Add parentheses around the string",
            "print(\"Hello World\")",
        ],
    },
    LevelDef {
        id: 5,
        title: "Wrong Boolean Value",
        description: "Boolean values in Python are capitalized. 'true' should be 'True'.",
        buggy_code: "flag = true",
        correct_code: "flag = True",
        hints: &[
            "Boolean values are capitalized in Python",
            "Change true to True",
            "Use True or False with capital letters",
        ],
    },
    LevelDef {
        id: 6,
        title: "Incorrect List Index",
        description: "Lists are zero-indexed. The first element is at index 0, not 1.",
        buggy_code: "first = items[1]",
        correct_code: "first = items[0]",
        hints: &[
            "Lists start at index 0",
            "The first element is at position 0",
            "Change 1 to 0",
        ],
    },
    LevelDef {
        id: 7,
        title: "Variable Name Typo",
        description: "Variable names must match exactly. 'mesage' is misspelled - it should be 'message'.",
        buggy_code: "mesage = \"Hello\"\nprint(message)",
        correct_code: "message = \"Hello\"\nprint(message)",
        hints: &[
            "Check the spelling carefully",
            "The variable name has a typo",
            "mesage should be message",
        ],
    },
    LevelDef {
        id: 8,
        title: "Assignment vs Equality",
        description: "Use == for comparison, not =. Single = is for assignment only.",
        buggy_code: "if x = 5:\n    print(\"Five\")",
        correct_code: "if x == 5:\n    print(\"Five\")",
        hints: &[
            "Single = is assignment, not comparison",
            "Use == for equality comparison",
            "Change = to ==",
        ],
    },
    LevelDef {
        id: 9,
        title: "Missing Return Statement",
        description: "This function should return the sum but it's missing a return statement.",
        buggy_code: "def add(a, b):\n    a + b",
        correct_code: "def add(a, b):\n    return a + b",
        hints: &[
            "The function doesn't return anything",
            "Add the return keyword",
            "return a + b",
        ],
    },
    LevelDef {
        id: 10,
        title: "Range Off-by-one Error",
        description: "range(5) generates numbers 0-4, not 1-5. To get 1-5, use range(1, 6).",
        buggy_code: "for i in range(5):\n    print(i)  # Should print 1-5",
        correct_code: "for i in range(1, 6):\n    print(i)  # Should print 1-5",
        hints: &[
            "range(5) gives 0-4, not 1-5",
            "Use range(start, stop)",
            "range(1, 6) gives 1-5",
        ],
    },
    LevelDef {
        id: 11,
        title: "Incorrect List Method",
        description: "Lists use append() to add elements, not add(). The add() method doesn't exist on lists.",
        buggy_code: "items.add(5)",
        correct_code: "items.append(5)",
        hints: &[
            "Lists don't have an add() method",
            "Use append() to add elements",
            "Change add to append",
        ],
    },
    LevelDef {
        id: 12,
        title: "Missing Parentheses in Function Call",
        description: "Function calls require parentheses. Without them, you're referencing the function, not calling it.",
        buggy_code: "result = calculate",
        correct_code: "result = calculate()",
        hints: &[
            "You need to call the function",
            "Add parentheses to call the function",
            "Add () after function name",
        ],
    },
    LevelDef {
        id: 13,
        title: "Dictionary Key Error",
        description: "Accessing a non-existent key raises KeyError. Use .get() method for safe access.",
        buggy_code: "value = data['missing_key']",
        correct_code: "value = data.get('missing_key', None)",
        hints: &[
            "Direct key access can raise KeyError",
            "Use .get() method for safe access",
            "data.get('key', default_value)",
        ],
    },
    LevelDef {
        id: 14,
        title: "String Concatenation Type Error",
        description: "You cannot concatenate strings and integers directly. Convert the integer to string first.",
        buggy_code: "message = \"Age: \" + 25",
        correct_code: "message = \"Age: \" + str(25)",
        hints: &[
            "Cannot concatenate str and int",
            "Convert the number to string",
            "Use str() function",
        ],
    },
    LevelDef {
        id: 15,
        title: "Mutable Default Argument",
        description: "Using mutable objects as default arguments is dangerous. The list is shared across all calls.",
        buggy_code: "def add_item(item, items=[]):\n    items.append(item)\n    return items",
        correct_code: "def add_item(item, items=None):\n    if items is None:\n        items = []\n    items.append(item)\n    return items",
        hints: &[
            "Default mutable arguments are shared",
            "Use None as default instead",
            "Create new list inside function",
        ],
    },
    LevelDef {
        id: 16,
        title: "List Modification During Iteration",
        description: "Modifying a list while iterating over it causes unexpected behavior. Create a copy first.",
        buggy_code: "for item in items:\n    if item < 0:\n        items.remove(item)",
        correct_code: "for item in items[:]:\n    if item < 0:\n        items.remove(item)",
        hints: &[
            "Don't modify list while iterating",
            "Create a copy with items[:]",
            "Iterate over a copy of the list",
        ],
    },
    LevelDef {
        id: 17,
        title: "Variable Scope Issue",
        description: "Variables defined inside if blocks are local. Use proper scope or return values.",
        buggy_code: "def get_status(score):\n    if score >= 50:\n        status = \"Pass\"\n    return status",
        correct_code: "def get_status(score):\n    status = \"Fail\"\n    if score >= 50:\n        status = \"Pass\"\n    return status",
        hints: &[
            "Variable might not be defined",
            "Initialize status before if block",
            "Set a default value first",
        ],
    },
    LevelDef {
        id: 18,
        title: "Integer Division Issue",
        description: "In Python 3, / always returns float. Use // for integer division if needed.",
        buggy_code: "average = total / count  # Need integer result",
        correct_code: "average = total // count  # Need integer result",
        hints: &[
            "/ returns float division",
            "Use // for integer division",
            "Change / to //",
        ],
    },
    LevelDef {
        id: 19,
        title: "Missing Exception Handling",
        description: "File operations can fail. Always use try-except to handle potential errors gracefully.",
        buggy_code: "file = open('data.txt', 'r')\ndata = file.read()\nfile.close()",
        correct_code: "try:\n    file = open('data.txt', 'r')\n    data = file.read()\n    file.close()\nexcept FileNotFoundError:\n    data = \"\"",
        hints: &[
            "File operations can raise exceptions",
            "Use try-except block",
            "Handle FileNotFoundError",
        ],
    },
    LevelDef {
        id: 20,
        title: "Generator vs List Comprehension",
        description: "Using list comprehension for large data wastes memory. Use generator expression instead.",
        buggy_code: "squares = [x**2 for x in range(1000000)]\ntotal = sum(squares)",
        correct_code: "squares = (x**2 for x in range(1000000))\ntotal = sum(squares)",
        hints: &[
            "List comprehension loads all in memory",
            "Use generator with () instead of []",
            "Change [] to () for generator",
        ],
    },
];
